// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Child process failures are *not* represented here: the invoker records
//! them as [`InvocationOutcome`](crate::types::InvocationOutcome)s and carries
//! on. These variants cover failures of zigtest's own machinery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZigtestError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invoker already finished; a run cannot be repeated")]
    AlreadyFinished,

    #[error("invoker was interrupted at target {index}; a run cannot be resumed")]
    Interrupted { index: usize },
}

pub type Result<T> = std::result::Result<T, ZigtestError>;
