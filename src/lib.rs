// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod plan;
pub mod report;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::RunnerConfig;
use crate::exec::{InvokerBackend, ProcessBackend, SequentialInvoker};
use crate::plan::{plan_invocations, CommandTemplate};
use crate::report::RunReport;

/// High-level entry point used by `main.rs`.
///
/// Loads the compiled-in config, then either prints the plan (`--dry-run`)
/// or runs every target through the real process backend. Child outcomes
/// are logged, never returned as errors.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = config::builtin()?;
    let mut stdout = std::io::stdout();

    if args.dry_run {
        print_dry_run(&cfg, &mut stdout)?;
        return Ok(());
    }

    let report = run_targets(&cfg, ProcessBackend::new(), stdout).await?;
    report.log_summary();
    Ok(())
}

/// Run every configured target, in order, through `backend`, writing
/// progress lines to `out`.
pub async fn run_targets<B, W>(
    cfg: &RunnerConfig,
    backend: B,
    out: W,
) -> errors::Result<RunReport>
where
    B: InvokerBackend,
    W: Write,
{
    let template = CommandTemplate::from_config(cfg);
    let invocations = plan_invocations(&template, cfg.targets());
    debug!(count = invocations.len(), program = template.program(), "planned invocations");

    let mut invoker = SequentialInvoker::new(invocations, backend, out);
    invoker.run().await
}

/// Dry-run output: the toolchain and the command each target would run.
pub fn print_dry_run<W: Write>(cfg: &RunnerConfig, out: &mut W) -> errors::Result<()> {
    let template = CommandTemplate::from_config(cfg);

    writeln!(out, "zigtest dry-run")?;
    writeln!(out, "  toolchain = {}", template.program())?;
    writeln!(out, "  targets ({}):", cfg.targets().len())?;
    for invocation in plan_invocations(&template, cfg.targets()) {
        writeln!(out, "  - {}", invocation.target)?;
        writeln!(out, "      cmd: {invocation}")?;
    }
    out.flush()?;

    debug!("dry-run complete (no execution)");
    Ok(())
}
