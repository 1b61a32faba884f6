// src/config/model.rs

use serde::Deserialize;

use crate::types::Target;

/// Configuration exactly as deserialized from TOML:
///
/// ```toml
/// [toolchain]
/// program = "zig"
/// subcommand = "test"
/// lib_root = "./src/lib"
/// trailing_args = ["-l", "c"]
///
/// [targets]
/// paths = ["main.zig"]
/// ```
///
/// Not yet validated; convert with `RunnerConfig::try_from`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRunnerConfig {
    pub toolchain: ToolchainSection,
    pub targets: TargetsSection,
}

/// `[toolchain]` section: the command template.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolchainSection {
    pub program: String,

    #[serde(default = "default_subcommand")]
    pub subcommand: String,

    /// Directory prefix joined in front of every target.
    #[serde(default)]
    pub lib_root: String,

    /// Literal arguments appended after the target path.
    #[serde(default)]
    pub trailing_args: Vec<String>,
}

fn default_subcommand() -> String {
    "test".to_string()
}

/// `[targets]` section. Order is invocation order.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetsSection {
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Validated configuration.
///
/// Only constructible through `TryFrom<RawRunnerConfig>`, so holders can rely
/// on the invariants in `validate.rs`.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub toolchain: ToolchainSection,
    targets: Vec<Target>,
}

impl RunnerConfig {
    pub(crate) fn new_unchecked(toolchain: ToolchainSection, targets: Vec<Target>) -> Self {
        Self { toolchain, targets }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }
}
