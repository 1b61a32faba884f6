// src/exec/invoker.rs

//! The sequential invoker.
//!
//! For each planned invocation, in order:
//! 1. write `\nrunning test: <target>` to the output and flush it;
//! 2. hand the invocation to the backend and wait for it to finish.
//!
//! Outcomes are logged and collected into a [`RunReport`] but never stop the
//! loop.

use std::io::Write;

use tracing::{error, info, warn};

use crate::errors::{Result, ZigtestError};
use crate::exec::backend::InvokerBackend;
use crate::report::RunReport;
use crate::types::{Invocation, InvocationOutcome, Target};

/// Position in the run. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokerState {
    NotStarted,
    Invoking { index: usize },
    Done,
}

pub struct SequentialInvoker<B, W> {
    invocations: Vec<Invocation>,
    backend: B,
    out: W,
    state: InvokerState,
}

impl<B, W> SequentialInvoker<B, W>
where
    B: InvokerBackend,
    W: Write,
{
    pub fn new(invocations: Vec<Invocation>, backend: B, out: W) -> Self {
        Self {
            invocations,
            backend,
            out,
            state: InvokerState::NotStarted,
        }
    }

    pub fn state(&self) -> InvokerState {
        self.state
    }

    /// Run every invocation once.
    ///
    /// Returns `Err` only for failures writing progress output, or if the
    /// invoker has already been started. Child failures end up in the report.
    pub async fn run(&mut self) -> Result<RunReport> {
        match self.state {
            InvokerState::NotStarted => {}
            InvokerState::Invoking { index } => return Err(ZigtestError::Interrupted { index }),
            InvokerState::Done => return Err(ZigtestError::AlreadyFinished),
        }

        let mut report = RunReport::default();

        for index in 0..self.invocations.len() {
            self.state = InvokerState::Invoking { index };
            let invocation = &self.invocations[index];

            write_progress(&mut self.out, &invocation.target)?;

            info!(
                target_file = %invocation.target,
                cmd = %invocation,
                "invoking toolchain"
            );
            let outcome = self.backend.invoke(invocation).await;
            log_outcome(invocation, &outcome);

            report.record(invocation.target.clone(), outcome);
        }

        self.state = InvokerState::Done;
        Ok(report)
    }
}

/// The progress line: a blank line, then `running test: <target>`.
pub fn write_progress<W: Write>(out: &mut W, target: &Target) -> Result<()> {
    writeln!(out, "\nrunning test: {target}")?;
    out.flush()?;
    Ok(())
}

fn log_outcome(invocation: &Invocation, outcome: &InvocationOutcome) {
    match outcome {
        InvocationOutcome::Exited { code, success: true } => {
            info!(target_file = %invocation.target, exit_code = ?code, "toolchain exited");
        }
        InvocationOutcome::Exited { code, success: false } => {
            warn!(
                target_file = %invocation.target,
                exit_code = ?code,
                "toolchain reported failure; continuing"
            );
        }
        InvocationOutcome::SpawnFailed { reason } => {
            error!(
                target_file = %invocation.target,
                cmd = %invocation,
                error = %reason,
                "could not start toolchain; continuing"
            );
        }
    }
}
