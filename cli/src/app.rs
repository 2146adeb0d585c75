//! Application context — unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, the resolved configuration, and
//! the production port implementations so command handlers take a single
//! `&AppContext`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{ConfigOverrides, validate_config};
use crate::domain::{SetupConfig, VirtualEnv};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::HostFs;
use crate::infra::locator::PathLocator;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Abort on environment creation or install failure.
    pub strict: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
    /// Explicit config file path (`--config` / `VENVBOOT_CONFIG`).
    pub config: Option<PathBuf>,
    /// Command-line overrides for config values.
    pub overrides: ConfigOverrides,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Resolved configuration: defaults, then file, then flags.
    pub config: SetupConfig,
    /// Config file consulted, if any.
    pub config_path: Option<PathBuf>,
    pub runner: TokioCommandRunner,
    pub locator: PathLocator,
    pub fs: HostFs,
    /// When `true`, creation and install failures abort setup.
    pub strict: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the resolved
    /// configuration is invalid.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let store = YamlConfigStore::new(flags.config);
        let config = store.load()?.with_overrides(flags.overrides);
        validate_config(&config)?;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let runner = match mode {
            OutputMode::Json => TokioCommandRunner::default().with_stdout_to_stderr(),
            OutputMode::Human => TokioCommandRunner::default(),
        };

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_path: store.path(),
            config,
            runner,
            locator: PathLocator,
            fs: HostFs,
            strict: flags.behaviour.strict,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// The configured virtual environment, with an absolute root.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn venv(&self) -> Result<VirtualEnv> {
        let root = std::path::absolute(&self.config.venv_dir).with_context(|| {
            format!("cannot resolve {}", self.config.venv_dir.display())
        })?;
        Ok(VirtualEnv::new(root))
    }

    /// Progress reporter bound to this context's output settings.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
