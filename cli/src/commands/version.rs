//! Version command

use std::process::ExitCode;

use anyhow::Result;

use crate::output::{HumanRenderer, OutputContext, json};

/// Run the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(as_json: bool, quiet: bool) -> Result<ExitCode> {
    let version = env!("CARGO_PKG_VERSION");

    if as_json {
        println!("{}", json::format_version(version)?);
    } else {
        let ctx = OutputContext::new(true, quiet);
        HumanRenderer::new(&ctx).render_version(version);
    }
    Ok(ExitCode::SUCCESS)
}
