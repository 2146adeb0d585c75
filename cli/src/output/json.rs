//! JSON output helpers.

use anyhow::{Context, Result};

use crate::domain::error::{ConfigError, SetupError};
use crate::domain::health::DoctorChecks;
use crate::domain::workflow::SetupReport;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format doctor results with the derived issue list.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_doctor(checks: &DoctorChecks, issues: &[String]) -> Result<String> {
    let obj = serde_json::json!({
        "status": if issues.is_empty() { "healthy" } else { "unhealthy" },
        "checks": checks,
        "issues": issues,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a finished setup run.
///
/// `status` is `complete` when every step succeeded and `incomplete` when a
/// step failed but the run carried on.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_setup(report: &SetupReport, next_step: &str) -> Result<String> {
    let obj = serde_json::json!({
        "status": if report.is_clean() { "complete" } else { "incomplete" },
        "setup": report,
        "next_step": next_step,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format the version object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_version(version: &str) -> Result<String> {
    serde_json::to_string(&serde_json::json!({ "version": version }))
        .context("JSON serialization failed")
}

/// Stable machine-readable code for an error returned from a command.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(setup) = err.downcast_ref::<SetupError>() {
        return match setup {
            SetupError::InterpreterNotFound => "INTERPRETER_NOT_FOUND",
            SetupError::EnvCreationFailed { .. } => "ENV_CREATION_FAILED",
            SetupError::InstallFailed { .. } => "INSTALL_FAILED",
            SetupError::ActivationFailed { .. } => "ACTIVATION_FAILED",
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "CONFIG_INVALID";
    }
    "ERROR"
}
