//! `venvboot doctor` — read-only environment diagnostics.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::doctor::run_doctor;
use crate::domain::health::collect_issues;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter, json};

/// Run the doctor command. Exits non-zero when any issue is found.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved or JSON
/// serialization fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let venv = app.venv()?;

    // Progress lines would corrupt JSON on stdout.
    let silent = OutputContext::new(true, true);
    let reporter = if app.is_json() {
        TerminalReporter::new(&silent)
    } else {
        app.reporter()
    };

    let checks = run_doctor(
        &app.locator,
        &app.runner,
        &app.fs,
        &reporter,
        &venv,
        &app.config.requirements,
    )
    .await?;
    let issues = collect_issues(&checks);

    if app.is_json() {
        println!("{}", json::format_doctor(&checks, &issues)?);
    } else {
        if let Some(path) = &app.config_path {
            app.output.kv("Config:", &path.display().to_string());
        }
        HumanRenderer::new(&app.output).render_doctor(&checks, &issues);
    }

    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
