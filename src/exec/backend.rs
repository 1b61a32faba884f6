// src/exec/backend.rs

//! Pluggable invoker backend abstraction.
//!
//! The sequential invoker hands each rendered [`Invocation`] to an
//! `InvokerBackend` and waits for the returned future before moving on.
//! Backends never fail: whatever goes wrong is reported as an
//! [`InvocationOutcome`] so the loop can carry on with the next target.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::ZigtestError;
use crate::types::{Invocation, InvocationOutcome};

/// Trait abstracting how a single invocation is executed.
pub trait InvokerBackend: Send {
    /// Run `invocation` to completion.
    fn invoke<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = InvocationOutcome> + Send + 'a>>;
}

/// Real backend: spawns the program directly (no shell) with inherited
/// stdin/stdout/stderr, so toolchain output goes straight to the terminal.
#[derive(Debug, Default, Clone)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl InvokerBackend for ProcessBackend {
    fn invoke<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = InvocationOutcome> + Send + 'a>> {
        Box::pin(async move {
            match run_process(invocation).await {
                Ok(outcome) => outcome,
                Err(err) => InvocationOutcome::SpawnFailed {
                    reason: err.to_string(),
                },
            }
        })
    }
}

async fn run_process(invocation: &Invocation) -> Result<InvocationOutcome, ZigtestError> {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|source| ZigtestError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    debug!(target_file = %invocation.target, pid = ?child.id(), "toolchain process spawned");

    let status = child.wait().await?;

    Ok(InvocationOutcome::Exited {
        code: status.code(),
        success: status.success(),
    })
}
