//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::ConfigOverrides;

/// Bootstrap a Python virtual environment for plugin development
///
/// With no subcommand, runs `setup`.
#[derive(Parser)]
#[command(name = "venvboot", version, propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty `NO_COLOR` counts)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail if creating the environment or installing dependencies fails
    #[arg(long, global = true)]
    pub strict: bool,

    /// Config file (default: ./venvboot.yaml, then the user config dir)
    #[arg(long, global = true, env = "VENVBOOT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Virtual environment directory [default: .venv]
    #[arg(long, global = true, env = "VENVBOOT_VENV_DIR", value_name = "DIR")]
    pub venv_dir: Option<PathBuf>,

    /// Requirements file for pip [default: requirements.txt]
    #[arg(long, global = true, env = "VENVBOOT_REQUIREMENTS", value_name = "FILE")]
    pub requirements: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the virtual environment and install dependencies (default)
    Setup,

    /// Check interpreter, environment, and requirements without changing anything
    Doctor,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            strict,
            config,
            venv_dir,
            requirements,
            command,
        } = self;

        let app = || {
            AppContext::new(AppFlags {
                output: OutputFlags {
                    no_color,
                    quiet,
                    json,
                },
                behaviour: BehaviourFlags { strict },
                config: config.clone(),
                overrides: ConfigOverrides {
                    venv_dir: venv_dir.clone(),
                    requirements: requirements.clone(),
                },
            })
        };

        match command.unwrap_or(Command::Setup) {
            Command::Setup => commands::setup::run(&app()?).await,
            Command::Doctor => commands::doctor::run(&app()?).await,
            Command::Version => commands::version::run(json, quiet),
        }
    }
}
