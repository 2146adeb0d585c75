//! Application service — doctor use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits. Nothing is written.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ExecutableLocator, LocalFs, ProgressReporter};
use crate::domain::health::{DoctorChecks, InterpreterCheck, ManifestCheck, VenvCheck};
use crate::domain::interpreter::{MIN_PYTHON, parse_python_version, select_interpreter};
use crate::domain::venv::VirtualEnv;

/// Run the doctor probe/diagnose workflow.
///
/// The service never touches `OutputContext` or any presentation type —
/// rendering is the caller's responsibility.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for probes that can fail
/// outright rather than report a negative check.
pub async fn run_doctor(
    locator: &impl ExecutableLocator,
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    venv: &VirtualEnv,
    manifest: &Path,
) -> Result<DoctorChecks> {
    reporter.step("checking interpreter...");
    let interpreter = probe_interpreter(locator, runner).await;

    reporter.step("checking virtual environment...");
    let present = fs.is_dir(venv.root());
    let venv_check = VenvCheck {
        path: venv.root().to_path_buf(),
        present,
        has_interpreter: present && fs.is_file(&venv.python()),
    };

    reporter.step("checking requirements...");
    let manifest_check = ManifestCheck {
        path: manifest.to_path_buf(),
        present: fs.is_file(manifest),
    };

    reporter.success("diagnostics complete");

    Ok(DoctorChecks {
        interpreter,
        venv: venv_check,
        manifest: manifest_check,
    })
}

// ── Internal probes ───────────────────────────────────────────────────────────

async fn probe_interpreter(
    locator: &impl ExecutableLocator,
    runner: &impl CommandRunner,
) -> InterpreterCheck {
    let Some(interpreter) = select_interpreter(|name| locator.locate(name)) else {
        return InterpreterCheck::default();
    };

    // Python 2 prints its version on stderr.
    let version = match runner.run(&interpreter.path, &[OsStr::new("--version")]).await {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            parse_python_version(&stdout).or_else(|| parse_python_version(&stderr))
        }
        Err(e) => {
            tracing::debug!(error = %e, "interpreter version probe failed");
            None
        }
    };

    InterpreterCheck {
        found: true,
        name: Some(interpreter.name.to_string()),
        path: Some(interpreter.path),
        version_ok: version.as_ref().is_none_or(|v| *v >= MIN_PYTHON),
        version: version.map(|v| v.to_string()),
    }
}
