//! Dependency Installer — runs `pip install -r <manifest>` inside the
//! activated environment.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::application::ports::{CommandRunner, ExecutableLocator, ProgressReporter};
use crate::domain::venv::Activation;
use crate::domain::workflow::{InstallOutcome, MSG_INSTALLING};

/// Package installer executable name.
pub const INSTALLER: &str = "pip";

/// Install every dependency listed in `manifest`.
///
/// `pip` is resolved against the activated search path so the environment's
/// own installer wins, or against the inherited `PATH` when the activation
/// carries none. The manifest is not inspected. Failures come back as
/// `InstallOutcome::Failed`; this never errors.
pub async fn install_deps(
    runner: &impl CommandRunner,
    locator: &impl ExecutableLocator,
    reporter: &impl ProgressReporter,
    activation: &Activation,
    manifest: &Path,
) -> InstallOutcome {
    reporter.step(MSG_INSTALLING);

    let installer = match activation.search_path() {
        Some(search_path) => locator.locate_in(INSTALLER, search_path),
        None => locator.locate(INSTALLER),
    }
    .unwrap_or_else(|| PathBuf::from(INSTALLER));
    tracing::debug!(installer = %installer.display(), manifest = %manifest.display(), "running installer");

    let args = [OsStr::new("install"), OsStr::new("-r"), manifest.as_os_str()];
    match runner.run_status(&installer, &args, Some(activation)).await {
        Ok(status) if status.success() => InstallOutcome::Installed,
        Ok(status) => InstallOutcome::Failed {
            reason: format!("{INSTALLER} exited with {status}"),
        },
        Err(e) => InstallOutcome::Failed {
            reason: format!("{e:#}"),
        },
    }
}
