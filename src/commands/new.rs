//! New command - interactively add a command template

use crate::{ClmError, Entry, store::Store, ui::{OutputWriter, UserInput}};

type Result<T> = std::result::Result<T, ClmError>;

/// Execute the new command
///
/// Prompts for title, command and tag (each trimmed, empty allowed),
/// appends the entry and saves the store.
///
/// # Errors
/// Returns `ClmError::Cancelled` if a prompt is aborted (nothing is saved),
/// or an input/store error.
pub fn execute(store: &Store, input: &dyn UserInput, output: &dyn OutputWriter) -> Result<()> {
    let Some(title) = ask(input, "Enter command title")? else {
        return Err(cancelled());
    };
    let Some(command) = ask(input, "Enter command")? else {
        return Err(cancelled());
    };
    let Some(tag) = ask(input, "Enter unique tag")? else {
        return Err(cancelled());
    };

    let count = store.add(Entry::new(title, command, tag))?;
    tracing::info!(path = %store.path().display(), count, "command added");

    output.success("Command saved successfully!");
    Ok(())
}

fn ask(input: &dyn UserInput, prompt: &str) -> Result<Option<String>> {
    Ok(input
        .prompt_text(prompt, true)?
        .map(|answer| answer.trim().to_string()))
}

fn cancelled() -> ClmError {
    ClmError::Cancelled("Command creation cancelled.".into())
}
