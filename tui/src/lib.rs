//! Terminal GUI layer for a kernel-backed console and its editor overview
//! strip.
//!
//! Two loosely related widgets, both composed into a host application's
//! ratatui frame rather than owning a terminal themselves:
//!
//! - [`ConsoleWidget`] binds an interactive shell surface to an external
//!   [`plume_kernel::KernelClient`] and forwards user intent (execute,
//!   namespace reset, clear, raw stdin) to it.
//! - [`FlagStrip`] renders a miniature overview of per-line editor events
//!   (diagnostics, todos, breakpoints, occurrences, search results) next to
//!   the editor's scrollbar, with click-to-jump and a hover viewport
//!   indicator.
//!
//! Widgets never talk to the host directly; they emit [`AppEvent`]s through
//! an [`AppEventSender`] and the host's event loop routes the rest.

pub mod app_event;
pub mod app_event_sender;
pub mod colors;
pub mod config;
mod confirm;
pub mod console;
pub mod editor_view;
pub mod flag_strip;

pub use app_event::AppEvent;
pub use app_event_sender::AppEventSender;
pub use config::Config;
pub use config::FlagStripConfig;
pub use config::ShellConfig;
pub use confirm::ConfirmDecision;
pub use confirm::ConfirmationPrompt;
pub use console::ConsoleWidget;
pub use editor_view::EditorEvent;
pub use editor_view::EditorView;
pub use flag_strip::FlagStrip;
pub use flag_strip::FlagStripView;
