//! Tests for the `doctor` application service.
//!
//! Verifies that `run_doctor()` reports interpreter, environment and
//! manifest state without running anything but a `--version` probe.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use venvboot_cli::application::services::doctor::run_doctor;
use venvboot_cli::domain::{VirtualEnv, collect_issues};

use crate::helpers::{ok_output, output_with_stderr};
use crate::mocks::{FakeFs, FakeLocator, NoopReporter, RecordingRunner};

fn venv() -> VirtualEnv {
    VirtualEnv::new(PathBuf::from("/work/.venv"))
}

fn manifest() -> &'static Path {
    Path::new("requirements.txt")
}

#[tokio::test]
async fn healthy_project_has_no_issues() {
    let locator = FakeLocator::with(&["python3"]);
    let runner = RecordingRunner::default().version_output(Some(ok_output(b"Python 3.11.4\n")));
    let fs = FakeFs::default()
        .with_dir("/work/.venv")
        .with_file(venv().python())
        .with_file("requirements.txt");

    let checks = run_doctor(&locator, &runner, &fs, &NoopReporter, &venv(), manifest())
        .await
        .expect("doctor");

    assert!(checks.interpreter.found);
    assert_eq!(checks.interpreter.name.as_deref(), Some("python3"));
    assert_eq!(checks.interpreter.version.as_deref(), Some("3.11.4"));
    assert!(checks.interpreter.version_ok);
    assert!(checks.venv.has_interpreter);
    assert!(collect_issues(&checks).is_empty());
    assert_eq!(runner.captured(), vec![vec!["--version".to_string()]]);
    assert!(runner.calls().is_empty(), "doctor must not create or install");
}

#[tokio::test]
async fn python2_version_on_stderr_is_flagged() {
    let locator = FakeLocator::with(&["python"]);
    let runner =
        RecordingRunner::default().version_output(Some(output_with_stderr(b"Python 2.7.18\n")));
    let fs = FakeFs::default().with_file("requirements.txt");

    let checks = run_doctor(&locator, &runner, &fs, &NoopReporter, &venv(), manifest())
        .await
        .expect("doctor");

    assert_eq!(checks.interpreter.version.as_deref(), Some("2.7.18"));
    assert!(!checks.interpreter.version_ok);
    let issues = collect_issues(&checks);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("too old"));
}

#[tokio::test]
async fn version_probe_failure_is_tolerated() {
    let locator = FakeLocator::with(&["python3"]);
    let runner = RecordingRunner::default().version_output(None);
    let fs = FakeFs::default().with_file("requirements.txt");

    let checks = run_doctor(&locator, &runner, &fs, &NoopReporter, &venv(), manifest())
        .await
        .expect("doctor");

    assert!(checks.interpreter.found);
    assert!(checks.interpreter.version.is_none());
    assert!(checks.interpreter.version_ok);
}

#[tokio::test]
async fn missing_interpreter_skips_version_probe() {
    let locator = FakeLocator::with(&[]);
    let runner = RecordingRunner::default();
    let fs = FakeFs::default().with_file("requirements.txt");

    let checks = run_doctor(&locator, &runner, &fs, &NoopReporter, &venv(), manifest())
        .await
        .expect("doctor");

    assert!(!checks.interpreter.found);
    assert!(runner.captured().is_empty());
    assert_eq!(collect_issues(&checks).len(), 1);
}

#[tokio::test]
async fn venv_without_interpreter_and_missing_manifest_are_reported() {
    let locator = FakeLocator::with(&["python3"]);
    let runner = RecordingRunner::default();
    let fs = FakeFs::default().with_dir("/work/.venv");

    let checks = run_doctor(&locator, &runner, &fs, &NoopReporter, &venv(), manifest())
        .await
        .expect("doctor");

    assert!(checks.venv.present);
    assert!(!checks.venv.has_interpreter);
    assert!(!checks.manifest.present);
    assert_eq!(collect_issues(&checks).len(), 2);
}
