// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `InvokerBackend` trait and `ProcessBackend`,
//!   which spawns the toolchain with `tokio::process::Command`. Tests replace
//!   it with a fake that records invocations.
//! - [`invoker`] owns the sequential loop: progress line, invocation, next.

pub mod backend;
pub mod invoker;

pub use backend::{InvokerBackend, ProcessBackend};
pub use invoker::{InvokerState, SequentialInvoker};
