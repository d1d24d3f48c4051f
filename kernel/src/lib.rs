//! Client-side handle for the external kernel execution backend.
//!
//! The kernel runs out of process; the console widget only ever holds a
//! [`KernelClient`], a cheap clonable sender of [`plume_protocol::KernelOp`]
//! directives. The embedder bridges the receiving ends to the real kernel
//! transport.

mod client;
mod error;

pub use client::KernelClient;
pub use client::KernelReceivers;
pub use error::KernelError;
