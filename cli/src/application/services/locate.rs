//! Interpreter Locator — finds `python`, then `python3`, on the search path.

use crate::application::ports::ExecutableLocator;
use crate::domain::error::SetupError;
use crate::domain::interpreter::{Interpreter, select_interpreter};

/// Select the interpreter for this run.
///
/// # Errors
///
/// Returns `SetupError::InterpreterNotFound` when no candidate resolves.
pub fn locate_interpreter(locator: &impl ExecutableLocator) -> Result<Interpreter, SetupError> {
    let interpreter = select_interpreter(|name| {
        let found = locator.locate(name);
        tracing::debug!(candidate = name, found = found.is_some(), "probed search path");
        found
    })
    .ok_or(SetupError::InterpreterNotFound)?;

    tracing::info!(
        interpreter = interpreter.name,
        path = %interpreter.path.display(),
        "interpreter selected"
    );
    Ok(interpreter)
}
