//! Python interpreter selection and version parsing.
//!
//! The search-path lookup itself lives behind the `ExecutableLocator` port;
//! this module only decides which candidate wins.

use std::path::PathBuf;

use semver::Version;
use serde::Serialize;

/// Executable names probed on the search path, in preference order.
pub const INTERPRETER_CANDIDATES: &[&str] = &["python", "python3"];

/// Oldest Python whose `venv` module and bundled `pip` we rely on.
pub const MIN_PYTHON: Version = Version::new(3, 8, 0);

/// The interpreter selected for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpreter {
    /// Candidate name that resolved (`python` or `python3`).
    pub name: &'static str,
    /// Path the name resolved to.
    pub path: PathBuf,
}

/// Return the first candidate that `resolve` can find.
///
/// `resolve` is called at most once per candidate and never again after a
/// hit, so `python3` is not probed when `python` is present.
pub fn select_interpreter<F>(mut resolve: F) -> Option<Interpreter>
where
    F: FnMut(&str) -> Option<PathBuf>,
{
    INTERPRETER_CANDIDATES
        .iter()
        .find_map(|&name| resolve(name).map(|path| Interpreter { name, path }))
}

/// Parse `python --version` output such as `Python 3.12.1` or `Python 3.13.0rc1`.
///
/// Missing minor/patch components default to zero.
#[must_use]
pub fn parse_python_version(output: &str) -> Option<Version> {
    let token = output
        .split_whitespace()
        .skip_while(|t| !t.eq_ignore_ascii_case("python"))
        .nth(1)?;

    let mut parts = token.split('.').map(|part| {
        let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
        digits.parse::<u64>().ok()
    });

    let major = parts.next().flatten()?;
    let minor = parts.next().flatten().unwrap_or(0);
    let patch = parts.next().flatten().unwrap_or(0);
    Some(Version::new(major, minor, patch))
}
