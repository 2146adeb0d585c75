//! `venvboot setup` — locate Python, provision the environment, install dependencies.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::setup::{SetupOptions, run_setup};
use crate::output::{OutputContext, TerminalReporter, json};

/// Run the setup command. With `--json`, progress is silenced and a single
/// JSON object describing the run is printed instead.
///
/// # Errors
///
/// Returns an error if no interpreter is found, or, in strict mode, if
/// creating, activating, or installing into the environment fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let venv = app.venv()?;

    // Progress lines would corrupt JSON on stdout.
    let silent = OutputContext::new(true, true);
    let reporter = if app.is_json() {
        TerminalReporter::new(&silent)
    } else {
        app.reporter()
    };

    let report = run_setup(
        &app.locator,
        &app.runner,
        &app.fs,
        SetupOptions {
            reporter: &reporter,
            venv: &venv,
            manifest: &app.config.requirements,
            next_step: &app.config.next_step,
            inherited_path: std::env::var_os("PATH"),
            strict: app.strict,
        },
    )
    .await?;

    tracing::info!(
        interpreter = report.interpreter.name,
        clean = report.is_clean(),
        "setup finished"
    );
    if app.is_json() {
        println!("{}", json::format_setup(&report, &app.config.next_step)?);
    }
    Ok(ExitCode::SUCCESS)
}
