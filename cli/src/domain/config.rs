//! Domain types and validators for setup configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Virtual environment directory, relative to the working directory.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Dependency manifest handed to the installer.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Next step named in the completion banner.
pub const DEFAULT_NEXT_STEP: &str = "Run build.bat to build the plugin.";

// ── Config schema ────────────────────────────────────────────────────────────

/// Setup configuration, optionally stored in `venvboot.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Where the virtual environment lives.
    pub venv_dir: PathBuf,
    /// Requirements file passed to `pip install -r`.
    pub requirements: PathBuf,
    /// Final banner line telling the operator what to do next.
    pub next_step: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            venv_dir: PathBuf::from(DEFAULT_VENV_DIR),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            next_step: DEFAULT_NEXT_STEP.to_string(),
        }
    }
}

/// Values supplied on the command line or via environment variables.
/// Each `Some` wins over whatever the config file says.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub venv_dir: Option<PathBuf>,
    pub requirements: Option<PathBuf>,
}

impl SetupConfig {
    /// Apply command-line overrides on top of file/default values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.venv_dir {
            self.venv_dir = dir;
        }
        if let Some(req) = overrides.requirements {
            self.requirements = req;
        }
        self
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a loaded configuration.
///
/// # Errors
///
/// Returns an error if the environment directory is empty or a filesystem
/// root, or if the requirements path is empty.
pub fn validate_config(config: &SetupConfig) -> Result<(), ConfigError> {
    if config.venv_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "venv_dir",
            reason: "must not be empty".to_string(),
        });
    }
    if is_root(&config.venv_dir) {
        return Err(ConfigError::InvalidValue {
            key: "venv_dir",
            reason: format!("{} is a filesystem root", config.venv_dir.display()),
        });
    }
    if config.requirements.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "requirements",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn is_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}
