// src/plan.rs

//! Command template and invocation rendering.

use crate::config::RunnerConfig;
use crate::types::{Invocation, Target};

/// `<program> <subcommand> <lib_root>/<target> <trailing_args...>`
///
/// The same template is applied to every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    subcommand: String,
    lib_root: String,
    trailing_args: Vec<String>,
}

impl CommandTemplate {
    pub fn new(
        program: impl Into<String>,
        subcommand: impl Into<String>,
        lib_root: impl Into<String>,
        trailing_args: Vec<String>,
    ) -> Self {
        Self {
            program: program.into(),
            subcommand: subcommand.into(),
            lib_root: lib_root.into(),
            trailing_args,
        }
    }

    pub fn from_config(cfg: &RunnerConfig) -> Self {
        let tc = &cfg.toolchain;
        Self::new(
            tc.program.clone(),
            tc.subcommand.clone(),
            tc.lib_root.clone(),
            tc.trailing_args.clone(),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Path handed to the toolchain for `target`, e.g. `./src/lib/main.zig`.
    pub fn target_path(&self, target: &Target) -> String {
        let root = self.lib_root.trim_end_matches('/');
        if root.is_empty() {
            target.as_str().to_string()
        } else {
            format!("{root}/{target}")
        }
    }

    pub fn render(&self, target: &Target) -> Invocation {
        let mut args = Vec::with_capacity(2 + self.trailing_args.len());
        args.push(self.subcommand.clone());
        args.push(self.target_path(target));
        args.extend(self.trailing_args.iter().cloned());

        Invocation {
            target: target.clone(),
            program: self.program.clone(),
            args,
        }
    }
}

/// Render every target, preserving list order.
pub fn plan_invocations(template: &CommandTemplate, targets: &[Target]) -> Vec<Invocation> {
    targets.iter().map(|t| template.render(t)).collect()
}
