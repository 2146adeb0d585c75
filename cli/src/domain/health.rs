//! Doctor check domain types and pure diagnostic functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::interpreter::{INTERPRETER_CANDIDATES, MIN_PYTHON};

// ── Types ─────────────────────────────────────────────────────────────────────

/// All check categories returned by the doctor command.
#[derive(Debug, Serialize)]
pub struct DoctorChecks {
    pub interpreter: InterpreterCheck,
    pub venv: VenvCheck,
    pub manifest: ManifestCheck,
}

/// Interpreter discovery and version.
#[derive(Debug, Default, Serialize)]
pub struct InterpreterCheck {
    /// Whether any candidate resolved on PATH.
    pub found: bool,
    /// Candidate name that resolved.
    pub name: Option<String>,
    pub path: Option<PathBuf>,
    /// Version reported by `--version`, e.g. `"3.12.1"`.
    pub version: Option<String>,
    /// Whether the version meets the minimum. Unknown versions pass.
    pub version_ok: bool,
}

/// Virtual environment directory state.
#[derive(Debug, Serialize)]
pub struct VenvCheck {
    pub path: PathBuf,
    pub present: bool,
    /// Whether the environment contains its own interpreter.
    pub has_interpreter: bool,
}

/// Dependency manifest state.
#[derive(Debug, Serialize)]
pub struct ManifestCheck {
    pub path: PathBuf,
    pub present: bool,
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Turn check results into operator-facing issue strings.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();

    if !checks.interpreter.found {
        issues.push(format!(
            "No Python interpreter found on PATH (looked for {})",
            INTERPRETER_CANDIDATES.join(", ")
        ));
    } else if !checks.interpreter.version_ok {
        let version = checks.interpreter.version.as_deref().unwrap_or("unknown");
        issues.push(format!("Python {version} is too old (need >= {MIN_PYTHON})"));
    }

    if checks.venv.present && !checks.venv.has_interpreter {
        issues.push(format!(
            "{} exists but has no interpreter; delete it and run setup again",
            checks.venv.path.display()
        ));
    }

    if !checks.manifest.present {
        issues.push(format!("{} not found", checks.manifest.path.display()));
    }

    issues
}
