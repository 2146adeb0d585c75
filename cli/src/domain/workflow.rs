//! Setup workflow phases, operator messages, and per-step outcomes.

use std::fmt;

use serde::Serialize;

use crate::domain::interpreter::Interpreter;

// ── Operator messages ─────────────────────────────────────────────────────────

pub const MSG_CREATING: &str = "Creating virtual environment...";
pub const MSG_INSTALLING: &str = "Installing dependencies...";
pub const MSG_COMPLETE: &str = "Setup complete.";

// ── Phases ────────────────────────────────────────────────────────────────────

/// Steps of the setup workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LocateInterpreter,
    ProvisionEnv,
    InstallDeps,
    ReportSuccess,
    Deactivate,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LocateInterpreter => "locate-interpreter",
            Self::ProvisionEnv => "provision-env",
            Self::InstallDeps => "install-deps",
            Self::ReportSuccess => "report-success",
            Self::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of the environment provisioning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ProvisionOutcome {
    /// The directory existed; creation was skipped.
    AlreadyPresent,
    /// `python -m venv` ran and exited successfully.
    Created,
    /// Creation was attempted and failed.
    Failed { reason: String },
}

/// How the installer's environment was prepared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ActivationOutcome {
    /// `VIRTUAL_ENV` set and the scripts directory first on `PATH`.
    Activated,
    /// The scripts directory could not be put on `PATH`; only
    /// `VIRTUAL_ENV` was set.
    PathUnchanged { reason: String },
}

/// Result of the dependency install step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum InstallOutcome {
    Installed,
    Failed { reason: String },
}

/// Everything a completed setup run observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    pub interpreter: Interpreter,
    pub provision: ProvisionOutcome,
    pub activation: ActivationOutcome,
    pub install: InstallOutcome,
}

impl SetupReport {
    /// `true` when no step reported a failure.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !matches!(self.provision, ProvisionOutcome::Failed { .. })
            && self.activation == ActivationOutcome::Activated
            && !matches!(self.install, InstallOutcome::Failed { .. })
    }
}
