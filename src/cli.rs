// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Running with no arguments is the normal mode: every compiled-in target is
//! tested. The flags below only affect diagnostics.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `zigtest`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "zigtest",
    version,
    about = "Run `zig test` against each library entry point in turn.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ZIGTEST_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the planned invocations, but don't spawn anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
