//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod interpreter;
pub mod venv;
pub mod workflow;

pub use config::{ConfigOverrides, SetupConfig, validate_config};
pub use error::{ConfigError, SetupError};
pub use health::{DoctorChecks, InterpreterCheck, ManifestCheck, VenvCheck, collect_issues};
pub use interpreter::{INTERPRETER_CANDIDATES, Interpreter, select_interpreter};
pub use venv::{Activation, VirtualEnv};
pub use workflow::{ActivationOutcome, InstallOutcome, Phase, ProvisionOutcome, SetupReport};
