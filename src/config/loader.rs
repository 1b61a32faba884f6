// src/config/loader.rs

use crate::config::model::{RawRunnerConfig, RunnerConfig};
use crate::errors::Result;

/// The runner configuration baked into the binary at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("defaults.toml");

/// Parse and validate a TOML document.
pub fn parse_str(contents: &str) -> Result<RunnerConfig> {
    let raw: RawRunnerConfig = toml::from_str(contents)?;
    RunnerConfig::try_from(raw)
}

/// The compiled-in configuration.
///
/// Fails only if `defaults.toml` was edited into an invalid state.
pub fn builtin() -> Result<RunnerConfig> {
    parse_str(EMBEDDED_CONFIG)
}
