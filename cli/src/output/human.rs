//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::health::DoctorChecks;
use crate::domain::interpreter::MIN_PYTHON;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version line.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("venvboot {version}");
    }

    /// Render doctor check results.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) {
        if self.ctx.quiet {
            return;
        }

        println!();
        self.ctx.header("venvboot environment check");
        println!();

        println!("  Interpreter:");
        let interp = &checks.interpreter;
        match (&interp.name, &interp.path) {
            (Some(name), Some(path)) => {
                self.print_check(true, &format!("{name} ({})", path.display()));
                let version = interp.version.as_deref().unwrap_or("unknown");
                self.print_check(
                    interp.version_ok,
                    &format!("Python {version} (need \u{2265} {MIN_PYTHON})"),
                );
            }
            _ => {
                self.print_check(false, "python / python3 not found on PATH");
                println!("      Install: https://www.python.org/downloads/");
            }
        }
        println!();

        println!("  Project:");
        let venv = &checks.venv;
        if venv.present {
            self.print_check(
                venv.has_interpreter,
                &format!("virtual environment at {}", venv.path.display()),
            );
        } else {
            println!(
                "    {} {} not created yet (setup will create it)",
                "-".style(self.ctx.styles.dim),
                venv.path.display()
            );
        }
        self.print_check(
            checks.manifest.present,
            &format!("{}", checks.manifest.path.display()),
        );

        println!();
        if issues.is_empty() {
            println!(
                "  {} Everything looks good!",
                "\u{2713}".style(self.ctx.styles.success)
            );
        } else {
            println!(
                "  {} Found {} issues.",
                "\u{2717}".style(self.ctx.styles.error),
                issues.len(),
            );
            for issue in issues {
                println!("    {} {issue}", "\u{2717}".style(self.ctx.styles.error));
            }
        }
        println!();
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}
