// tests/dry_run.rs

use std::error::Error;

use zigtest::config;
use zigtest::print_dry_run;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn dry_run_lists_each_planned_command() -> TestResult {
    let cfg = config::builtin()?;
    let mut out = Vec::new();

    print_dry_run(&cfg, &mut out)?;

    let text = String::from_utf8(out)?;
    assert!(text.starts_with("zigtest dry-run\n"));
    assert!(text.contains("  targets (3):\n"));
    assert!(text.contains("  - libs/assets.zig\n      cmd: zig test ./src/lib/libs/assets.zig -l c\n"));
    assert!(!text.contains("running test:"));
    Ok(())
}
