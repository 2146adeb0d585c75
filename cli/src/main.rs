//! venvboot - bootstrap a Python virtual environment for plugin development

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use venvboot_cli::cli::Cli;
use venvboot_cli::output::json;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let as_json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            match json::format_error(&format!("{e:#}"), json::error_code(&e)) {
                Ok(obj) if as_json => println!("{obj}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for progress and JSON.
fn init_tracing(verbose: bool) {
    let default = if verbose { "venvboot_cli=debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
