// src/report.rs

//! Per-run summary of invocation outcomes.
//!
//! Purely diagnostic: the process exit status never depends on it.

use tracing::{info, warn};

use crate::types::{InvocationOutcome, Target};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    entries: Vec<(Target, InvocationOutcome)>,
}

impl RunReport {
    pub fn record(&mut self, target: Target, outcome: InvocationOutcome) {
        self.entries.push((target, outcome));
    }

    /// Outcomes in invocation order.
    pub fn entries(&self) -> &[(Target, InvocationOutcome)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    /// Targets whose invocation did not exit successfully, including those
    /// that never started.
    pub fn failed_targets(&self) -> Vec<&Target> {
        self.entries
            .iter()
            .filter(|(_, o)| !o.is_success())
            .map(|(t, _)| t)
            .collect()
    }

    pub fn log_summary(&self) {
        let failed = self.failed_targets();
        if failed.is_empty() {
            info!(total = self.total(), "all toolchain invocations succeeded");
        } else {
            let names: Vec<&str> = failed.iter().map(|t| t.as_str()).collect();
            warn!(
                total = self.total(),
                passed = self.passed(),
                failed = ?names,
                "some toolchain invocations did not succeed (exit status unaffected)"
            );
        }
    }
}
