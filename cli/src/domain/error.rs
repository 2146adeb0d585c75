//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Setup errors ──────────────────────────────────────────────────────────────

/// Errors that stop the setup workflow.
///
/// Only `InterpreterNotFound` is raised by default. The creation, install,
/// and activation variants are raised only when the workflow runs in strict
/// mode.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(
        "Python is not installed or not on PATH. Install Python 3 and make sure \
         'python' or 'python3' can be found on your PATH, then run setup again."
    )]
    InterpreterNotFound,

    #[error("Creating virtual environment at {} failed: {reason}", .path.display())]
    EnvCreationFailed { path: PathBuf, reason: String },

    #[error("Installing dependencies from {} failed: {reason}", .manifest.display())]
    InstallFailed { manifest: PathBuf, reason: String },

    #[error("Cannot activate virtual environment at {}: {reason}", .path.display())]
    ActivationFailed { path: PathBuf, reason: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to loading and validating the setup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}
