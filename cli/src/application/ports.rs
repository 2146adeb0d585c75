//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;

use crate::domain::{Activation, SetupConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &Path, args: &[&OsStr]) -> Result<Output>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &Path,
        args: &[&OsStr],
        timeout: Duration,
    ) -> Result<Output>;

    /// Run a program with inherited stdio and wait for it to exit.
    /// No timeout. When `activation` is given, its variables are applied to
    /// the child environment.
    async fn run_status(
        &self,
        program: &Path,
        args: &[&OsStr],
        activation: Option<&Activation>,
    ) -> Result<ExitStatus>;
}

// ── Search Path Port ──────────────────────────────────────────────────────────

/// Resolves executable names the way a shell would.
pub trait ExecutableLocator {
    /// Look `name` up on the process's own `PATH`.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Look `name` up on an explicit search path.
    fn locate_in(&self, name: &str, search_path: &OsStr) -> Option<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a neutral informational message.
    fn info(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Filesystem and Config Ports ───────────────────────────────────────────────

/// Read-only filesystem queries the services need.
pub trait LocalFs {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
}

/// Abstracts where setup configuration comes from.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested file is missing, or if a
    /// file exists but cannot be read or parsed.
    fn load(&self) -> Result<SetupConfig>;

    /// The file `load` reads from, if any.
    fn path(&self) -> Option<PathBuf>;
}
