//! List command - pick a command, fill in placeholders, copy it

use crate::{
    ClmError,
    clipboard::Clipboard,
    store::{self, Store},
    template,
    ui::{self, OutputWriter, UserInput},
};

type Result<T> = std::result::Result<T, ClmError>;

/// Execute the list command
///
/// With a `tag`, only entries whose tag equals it exactly are offered. The
/// picked entry is resolved by the picker's index into that same filtered
/// view, its placeholders are prompted for, and the result is copied to
/// the clipboard and printed. A clipboard failure is reported as a warning;
/// the command is still printed.
///
/// # Errors
/// Returns `ClmError::Cancelled` if the picker or a placeholder prompt is
/// aborted, or an input/store error.
pub fn execute(
    store: &Store,
    tag: Option<&str>,
    input: &dyn UserInput,
    clipboard: &dyn Clipboard,
    output: &dyn OutputWriter,
) -> Result<()> {
    let entries = store.load()?;
    if entries.is_empty() {
        output.info("No commands found.");
        return Ok(());
    }

    let view = match tag {
        Some(tag) => {
            let filtered = store::filter_by_tag(&entries, tag);
            if filtered.is_empty() {
                output.info(&format!("No commands found with tag '{tag}'."));
                return Ok(());
            }
            filtered
        }
        None => entries,
    };

    let labels = ui::entry_labels(&view);
    let Some(selection) = ui::pick(input, "Select a command to copy", &labels)? else {
        return Err(ClmError::Cancelled("Command selection cancelled.".into()));
    };
    let entry = &view[selection.index];
    tracing::debug!(index = selection.index, title = %entry.title, "command selected");

    let Some(command) = template::substitute(&entry.command, input)? else {
        return Err(ClmError::Cancelled("Command selection cancelled.".into()));
    };

    match clipboard.set_text(&command) {
        Ok(()) => output.info("Command copied to your clipboard:"),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            output.warning(&format!("{e}; command not copied:"));
        }
    }
    output.write(&command);
    Ok(())
}
