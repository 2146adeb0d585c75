//! Application service — the setup use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! `LOCATE_INTERPRETER → PROVISION_ENV → INSTALL_DEPS → REPORT_SUCCESS → DEACTIVATE`,
//! with the only default exit being a missing interpreter.

use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ExecutableLocator, LocalFs, ProgressReporter};
use crate::application::services::install::install_deps;
use crate::application::services::locate::locate_interpreter;
use crate::application::services::provision::provision_env;
use crate::domain::error::SetupError;
use crate::domain::venv::VirtualEnv;
use crate::domain::workflow::{
    ActivationOutcome, InstallOutcome, MSG_COMPLETE, Phase, ProvisionOutcome, SetupReport,
};

pub struct SetupOptions<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    pub venv: &'a VirtualEnv,
    pub manifest: &'a Path,
    /// Banner line naming what the operator should do next.
    pub next_step: &'a str,
    /// `PATH` inherited by child processes, before activation.
    pub inherited_path: Option<OsString>,
    /// Treat creation, activation, and install failures as fatal.
    pub strict: bool,
}

/// Run the setup workflow.
///
/// Accepts port trait bounds so the caller can inject real or mock
/// implementations. The service never touches `OutputContext` or any
/// presentation type.
///
/// # Errors
///
/// Returns `SetupError::InterpreterNotFound` before any subprocess is spawned
/// when neither `python` nor `python3` is on the search path. In strict mode,
/// also returns `EnvCreationFailed`, `ActivationFailed`, or `InstallFailed`
/// for the first failing step.
pub async fn run_setup(
    locator: &impl ExecutableLocator,
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    opts: SetupOptions<'_, impl ProgressReporter>,
) -> Result<SetupReport> {
    let SetupOptions {
        reporter,
        venv,
        manifest,
        next_step,
        inherited_path,
        strict,
    } = opts;

    tracing::debug!(phase = %Phase::LocateInterpreter);
    let interpreter = locate_interpreter(locator)?;

    tracing::debug!(phase = %Phase::ProvisionEnv);
    let provision = provision_env(runner, fs, reporter, &interpreter, venv).await;
    if let ProvisionOutcome::Failed { reason } = &provision {
        tracing::warn!(phase = %Phase::ProvisionEnv, %reason, strict, "environment creation failed");
        if strict {
            return Err(SetupError::EnvCreationFailed {
                path: venv.root().to_path_buf(),
                reason: reason.clone(),
            }
            .into());
        }
        reporter.warn(&format!("creating virtual environment failed: {reason}"));
    }

    tracing::debug!(phase = %Phase::InstallDeps);
    let (activation, activation_outcome) = match venv.activate(inherited_path.as_deref()) {
        Ok(activation) => (activation, ActivationOutcome::Activated),
        Err(e) => {
            tracing::warn!(phase = %Phase::InstallDeps, error = %e, strict, "activation failed");
            if strict {
                return Err(e.into());
            }
            reporter.warn(&format!("{e}; running the installer with the inherited PATH"));
            (
                venv.activate_without_path(),
                ActivationOutcome::PathUnchanged {
                    reason: e.to_string(),
                },
            )
        }
    };
    let install = install_deps(runner, locator, reporter, &activation, manifest).await;
    if let InstallOutcome::Failed { reason } = &install {
        tracing::warn!(phase = %Phase::InstallDeps, %reason, strict, "dependency install failed");
        if strict {
            return Err(SetupError::InstallFailed {
                manifest: manifest.to_path_buf(),
                reason: reason.clone(),
            }
            .into());
        }
        reporter.warn(&format!("installing dependencies failed: {reason}"));
    }

    tracing::debug!(phase = %Phase::ReportSuccess);
    reporter.success(MSG_COMPLETE);
    reporter.info(next_step);

    tracing::debug!(phase = %Phase::Deactivate);
    activation.deactivate();

    Ok(SetupReport {
        interpreter,
        provision,
        activation: activation_outcome,
        install,
    })
}
