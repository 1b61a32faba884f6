use std::fmt;

/// A library file, relative to the toolchain's `lib_root`, to be tested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    pub fn new(path: impl Into<String>) -> Self {
        Target(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully rendered toolchain command for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: Target,
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    /// Shell-like rendering, e.g. `zig test ./src/lib/main.zig -l c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What happened when an invocation was attempted.
///
/// Recorded for diagnostics only; none of these affect the process exit
/// status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The process ran to completion. `code` is `None` when it was killed by
    /// a signal.
    Exited { code: Option<i32>, success: bool },
    /// The process could not be started (missing toolchain, permissions...).
    SpawnFailed { reason: String },
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Exited { success: true, .. })
    }
}
