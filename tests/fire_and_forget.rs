// tests/fire_and_forget.rs

//! Child failures never stop the loop and never surface as errors.

use std::error::Error;

use zigtest::config;
use zigtest::run_targets;
use zigtest::types::InvocationOutcome;
use zigtest_test_utils::fake_backend::{failure, spawn_failed, success};
use zigtest_test_utils::{init_tracing, FakeBackend, Transcript};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn every_target_is_invoked_even_when_all_fail() -> TestResult {
    init_tracing();

    let cfg = config::builtin()?;
    let transcript = Transcript::new();
    let backend = FakeBackend::new(transcript.clone()).with_outcomes([
        spawn_failed("No such file or directory"),
        failure(1),
        failure(2),
    ]);
    let invoked = backend.invoked();

    let report = run_targets(&cfg, backend, transcript.clone()).await?;

    assert_eq!(invoked.lock().unwrap().len(), 3);
    assert_eq!(transcript.contents().matches("running test: ").count(), 3);
    assert_eq!(report.passed(), 0);
    assert_eq!(report.failed_targets().len(), 3);
    Ok(())
}

#[tokio::test]
async fn report_keeps_outcomes_in_invocation_order() -> TestResult {
    init_tracing();

    let cfg = config::builtin()?;
    let transcript = Transcript::new();
    let backend = FakeBackend::new(transcript.clone()).with_outcomes([
        success(),
        failure(3),
        success(),
    ]);

    let report = run_targets(&cfg, backend, transcript).await?;

    let summary: Vec<(&str, bool)> = report
        .entries()
        .iter()
        .map(|(t, o)| (t.as_str(), o.is_success()))
        .collect();
    assert_eq!(
        summary,
        [
            ("main.zig", true),
            ("libs/assets.zig", false),
            ("libs/gui/export.zig", true),
        ]
    );
    assert_eq!(
        report.entries()[1].1,
        InvocationOutcome::Exited { code: Some(3), success: false }
    );
    Ok(())
}
