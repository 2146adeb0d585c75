//! Environment Provisioner — creates the virtual environment if it is absent.

use std::ffi::OsStr;

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::domain::interpreter::Interpreter;
use crate::domain::venv::VirtualEnv;
use crate::domain::workflow::{MSG_CREATING, ProvisionOutcome};

/// Ensure a virtual environment exists at `venv.root()`.
///
/// An existing directory is left untouched. Creation failures are returned
/// as `ProvisionOutcome::Failed` for the caller to judge; this never errors.
pub async fn provision_env(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    interpreter: &Interpreter,
    venv: &VirtualEnv,
) -> ProvisionOutcome {
    if fs.is_dir(venv.root()) {
        tracing::debug!(venv = %venv.root().display(), "virtual environment present, skipping creation");
        return ProvisionOutcome::AlreadyPresent;
    }

    reporter.step(MSG_CREATING);
    let args = [OsStr::new("-m"), OsStr::new("venv"), venv.root().as_os_str()];
    match runner.run_status(&interpreter.path, &args, None).await {
        Ok(status) if status.success() => {
            tracing::info!(venv = %venv.root().display(), "virtual environment created");
            ProvisionOutcome::Created
        }
        Ok(status) => ProvisionOutcome::Failed {
            reason: format!("{} -m venv exited with {status}", interpreter.name),
        },
        Err(e) => ProvisionOutcome::Failed {
            reason: format!("{e:#}"),
        },
    }
}
