//! Delete command - pick a command and remove it

use crate::{
    ClmError,
    store::Store,
    ui::{self, OutputWriter, UserInput},
};

type Result<T> = std::result::Result<T, ClmError>;

/// Execute the delete command
///
/// # Errors
/// Returns `ClmError::Cancelled` if the picker is aborted (the store is not
/// touched), or an input/store error.
pub fn execute(store: &Store, input: &dyn UserInput, output: &dyn OutputWriter) -> Result<()> {
    let mut entries = store.load()?;
    if entries.is_empty() {
        output.info("No commands found to delete.");
        return Ok(());
    }

    let labels = ui::entry_labels(&entries);
    let Some(selection) = ui::pick(input, "Select a command to delete", &labels)? else {
        return Err(ClmError::Cancelled("Command deletion cancelled.".into()));
    };

    let removed = entries.remove(selection.index);
    store.save(&entries)?;
    tracing::info!(title = %removed.title, remaining = entries.len(), "command deleted");

    output.success("Command deleted successfully.");
    Ok(())
}
