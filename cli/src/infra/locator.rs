//! Search path lookup backed by the `which` crate.

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::application::ports::ExecutableLocator;

/// Resolves executables the way the platform shell does, including
/// `PATHEXT` handling on Windows.
pub struct PathLocator;

impl ExecutableLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn locate_in(&self, name: &str, search_path: &OsStr) -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        which::which_in(name, Some(search_path), cwd).ok()
    }
}
