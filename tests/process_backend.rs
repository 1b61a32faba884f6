// tests/process_backend.rs

//! Runs the real `ProcessBackend` against small shell scripts that stand in
//! for the toolchain.

#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zigtest::exec::{InvokerBackend, ProcessBackend};
use zigtest::run_targets;
use zigtest::types::{Invocation, InvocationOutcome, Target};
use zigtest_test_utils::{init_tracing, with_timeout, RunnerConfigBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

#[tokio::test]
async fn passes_exact_argv_to_the_toolchain() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let log = dir.path().join("argv.log");
    let script = write_script(
        dir.path(),
        "fake-zig",
        &format!(
            "printf '%s|' \"$@\" >> '{log}'\necho >> '{log}'",
            log = log.display()
        ),
    )?;

    let cfg = RunnerConfigBuilder::new()
        .program(script.to_str().ok_or("non-utf8 temp path")?)
        .target("main.zig")
        .target("libs/assets.zig")
        .target("libs/gui/export.zig")
        .build();

    let mut progress = Vec::new();
    let report = with_timeout(run_targets(&cfg, ProcessBackend::new(), &mut progress)).await?;

    assert_eq!(report.passed(), 3);
    assert_eq!(
        fs::read_to_string(&log)?,
        "test|./src/lib/main.zig|-l|c|\n\
         test|./src/lib/libs/assets.zig|-l|c|\n\
         test|./src/lib/libs/gui/export.zig|-l|c|\n"
    );
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_is_recorded_and_the_run_continues() -> TestResult {
    init_tracing();

    let dir = TempDir::new()?;
    let script = write_script(dir.path(), "failing-zig", "exit 7")?;

    let cfg = RunnerConfigBuilder::new()
        .program(script.to_str().ok_or("non-utf8 temp path")?)
        .target("a.zig")
        .target("b.zig")
        .build();

    let mut progress = Vec::new();
    let report = with_timeout(run_targets(&cfg, ProcessBackend::new(), &mut progress)).await?;

    assert_eq!(report.total(), 2);
    for (_, outcome) in report.entries() {
        assert_eq!(outcome, &InvocationOutcome::Exited { code: Some(7), success: false });
    }
    assert_eq!(
        String::from_utf8(progress)?,
        "\nrunning test: a.zig\n\nrunning test: b.zig\n"
    );
    Ok(())
}

#[tokio::test]
async fn missing_toolchain_becomes_a_spawn_failure() {
    init_tracing();

    let invocation = Invocation {
        target: Target::new("main.zig"),
        program: "zigtest-definitely-not-installed".to_string(),
        args: vec!["test".to_string()],
    };

    let outcome = ProcessBackend::new().invoke(&invocation).await;

    match outcome {
        InvocationOutcome::SpawnFailed { reason } => {
            assert!(reason.contains("zigtest-definitely-not-installed"), "reason: {reason}");
        }
        other => panic!("expected SpawnFailed, got {other:?}"),
    }
}
