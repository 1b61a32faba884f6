// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{RawRunnerConfig, RunnerConfig};
use crate::errors::{Result, ZigtestError};
use crate::types::Target;

impl TryFrom<RawRunnerConfig> for RunnerConfig {
    type Error = ZigtestError;

    fn try_from(raw: RawRunnerConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let targets = raw.targets.paths.into_iter().map(Target::new).collect();
        Ok(RunnerConfig::new_unchecked(raw.toolchain, targets))
    }
}

fn validate_raw_config(cfg: &RawRunnerConfig) -> Result<()> {
    validate_toolchain(cfg)?;
    ensure_has_targets(cfg)?;
    validate_target_paths(cfg)?;
    Ok(())
}

fn validate_toolchain(cfg: &RawRunnerConfig) -> Result<()> {
    if cfg.toolchain.program.trim().is_empty() {
        return Err(ZigtestError::ConfigError(
            "[toolchain].program must not be empty".to_string(),
        ));
    }
    if cfg.toolchain.subcommand.trim().is_empty() {
        return Err(ZigtestError::ConfigError(
            "[toolchain].subcommand must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn ensure_has_targets(cfg: &RawRunnerConfig) -> Result<()> {
    if cfg.targets.paths.is_empty() {
        return Err(ZigtestError::ConfigError(
            "[targets].paths must list at least one file".to_string(),
        ));
    }
    Ok(())
}

fn validate_target_paths(cfg: &RawRunnerConfig) -> Result<()> {
    let mut seen = HashSet::new();
    for path in cfg.targets.paths.iter() {
        if path.trim().is_empty() {
            return Err(ZigtestError::ConfigError(
                "[targets].paths contains an empty entry".to_string(),
            ));
        }
        if path.starts_with('/') {
            return Err(ZigtestError::ConfigError(format!(
                "target '{}' must be relative to [toolchain].lib_root",
                path
            )));
        }
        if !seen.insert(path.as_str()) {
            return Err(ZigtestError::ConfigError(format!(
                "target '{}' is listed more than once",
                path
            )));
        }
    }
    Ok(())
}
