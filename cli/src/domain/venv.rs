//! Virtual environment layout and activation.
//!
//! Activation here never touches the current process. It produces the
//! environment changes child processes need to see the virtual environment
//! as the active one; deactivation discards them.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::domain::error::SetupError;

/// Directory inside a virtual environment holding its executables.
#[cfg(windows)]
pub const SCRIPTS_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const SCRIPTS_DIR: &str = "bin";

#[cfg(windows)]
const PYTHON_EXE: &str = "python.exe";
#[cfg(not(windows))]
const PYTHON_EXE: &str = "python";

/// Variables an activation script unsets.
pub const CLEARED_VARS: &[&str] = &["PYTHONHOME"];

/// A virtual environment rooted at a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// `root` should be absolute so `VIRTUAL_ENV` is meaningful to children.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/bin` on Unix, `<root>\Scripts` on Windows.
    #[must_use]
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }

    /// The environment's own interpreter.
    #[must_use]
    pub fn python(&self) -> PathBuf {
        self.scripts_dir().join(PYTHON_EXE)
    }

    /// Build the activation environment on top of the inherited `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::ActivationFailed` if the scripts directory cannot
    /// be placed on a search path (it contains the platform path separator).
    pub fn activate(&self, inherited_path: Option<&OsStr>) -> Result<Activation, SetupError> {
        let scripts = self.scripts_dir();
        let inherited = inherited_path
            .map(std::env::split_paths)
            .into_iter()
            .flatten()
            .filter(|p| !p.as_os_str().is_empty());
        let search_path = std::env::join_paths(std::iter::once(scripts).chain(inherited))
            .map_err(|e| SetupError::ActivationFailed {
                path: self.root.clone(),
                reason: e.to_string(),
            })?;

        Ok(Activation {
            virtual_env: self.root.clone(),
            search_path: Some(search_path),
        })
    }

    /// Activation that sets `VIRTUAL_ENV` but leaves the inherited `PATH`
    /// alone. Used when `activate` cannot build a search path.
    #[must_use]
    pub fn activate_without_path(&self) -> Activation {
        Activation {
            virtual_env: self.root.clone(),
            search_path: None,
        }
    }
}

/// Environment changes applied to processes run "inside" the virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    virtual_env: PathBuf,
    search_path: Option<OsString>,
}

impl Activation {
    #[must_use]
    pub fn virtual_env(&self) -> &Path {
        &self.virtual_env
    }

    /// `PATH` with the environment's scripts directory first, or `None`
    /// when children keep the inherited `PATH`.
    #[must_use]
    pub fn search_path(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }

    /// Variables to set on child processes.
    pub fn vars(&self) -> impl Iterator<Item = (&'static str, &OsStr)> {
        std::iter::once(("VIRTUAL_ENV", self.virtual_env.as_os_str()))
            .chain(self.search_path.as_deref().map(|path| ("PATH", path)))
    }

    /// Variables to remove from child processes.
    #[must_use]
    pub fn cleared(&self) -> &'static [&'static str] {
        CLEARED_VARS
    }

    /// Drop the activation. Nothing in this process was changed, so there is
    /// nothing to restore beyond forgetting the child environment.
    pub fn deactivate(self) {
        tracing::debug!(virtual_env = %self.virtual_env.display(), "deactivated");
    }
}
