// src/config/mod.rs

//! Compiled-in runner configuration.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: parses the embedded `defaults.toml` (or any TOML string).
//! - `validate.rs`: basic invariants on targets and the toolchain template.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{builtin, parse_str, EMBEDDED_CONFIG};
pub use model::{RawRunnerConfig, RunnerConfig, TargetsSection, ToolchainSection};
