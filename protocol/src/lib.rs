//! Types crossing the boundary between the GUI layer and the kernel
//! execution backend.
//!
//! The backend itself (process management, transport, code execution) lives
//! elsewhere; this crate only pins down the shape of what travels in each
//! direction. Directives flow UI → kernel as [`KernelOp`]; asynchronous
//! results flow kernel → UI as [`KernelEvent`].

use serde::Deserialize;
use serde::Serialize;

/// A directive submitted to the execution backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelOp {
    /// Run `code` in the kernel. When `silent` is set the prompt does not
    /// advance and nothing is echoed to the console; used for out-of-band
    /// setup commands.
    Execute { code: String, silent: bool },
    /// Forward one raw line to the kernel's stdin channel, answering an
    /// input request from running code.
    Input { line: String },
}

impl KernelOp {
    pub fn execute(code: impl Into<String>) -> Self {
        Self::Execute {
            code: code.into(),
            silent: false,
        }
    }

    pub fn silent_execute(code: impl Into<String>) -> Self {
        Self::Execute {
            code: code.into(),
            silent: true,
        }
    }
}

/// Which output stream a [`KernelEvent::Stream`] chunk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamName {
    Stdout,
    Stderr,
}

/// An asynchronous notification from the execution backend, delivered to the
/// UI through the host application's event queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelEvent {
    /// The kernel finished starting up and reported its capabilities.
    SessionStarted(SessionInfo),
    /// A chunk of output produced by running code.
    Stream { name: StreamName, text: String },
    /// Running code is blocked on `input()`; the console should collect a
    /// line and send it back as [`KernelOp::Input`].
    InputRequest { prompt: String, password: bool },
    /// The backend reported an error through its own channel.
    Error { message: String },
}

/// Capabilities and identity reported by a kernel at session start.
///
/// Consumed by the console's banner selection; `pylab_available` and
/// `symbolic_math_available` reflect whether the corresponding library
/// stacks were importable on the kernel side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionInfo {
    /// The kernel's own multi-line startup banner.
    pub banner: String,
    pub language: String,
    pub language_version: String,
    pub pylab_available: bool,
    pub symbolic_math_available: bool,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            banner: String::new(),
            language: "Python".to_string(),
            language_version: String::new(),
            pylab_available: false,
            symbolic_math_available: false,
        }
    }
}
