//! Filesystem infrastructure — implements the `LocalFs` port.

use std::path::Path;

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
pub struct HostFs;

impl LocalFs for HostFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
