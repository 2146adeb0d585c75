//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::SetupConfig;
use crate::domain::error::ConfigError;

/// Project-local config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "venvboot.yaml";

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
///
/// Lookup order: an explicit `--config` / `VENVBOOT_CONFIG` path, then
/// `./venvboot.yaml`, then `<user config dir>/venvboot/config.yaml`.
#[derive(Default)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }

    fn user_config() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("venvboot").join("config.yaml"))
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<SetupConfig> {
        if let Some(path) = &self.explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
        }
        let Some(path) = self.path() else {
            return Ok(SetupConfig::default());
        };
        if !path.is_file() {
            return Ok(SetupConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: SetupConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit {
            return Some(path.clone());
        }
        let local = PathBuf::from(PROJECT_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::user_config()
    }
}
