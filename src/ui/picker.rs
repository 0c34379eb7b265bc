//! Single-choice picker over stored entries

use super::input::{Result, UserInput};
use crate::Entry;

/// The item chosen in a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position within the slice handed to [`pick`]
    pub index: usize,
    /// Label that was displayed for that position
    pub label: String,
}

/// Display label of an entry: `"<title>: <command>"`
#[must_use]
pub fn entry_label(entry: &Entry) -> String {
    format!("{}: {}", entry.title, entry.command)
}

/// Labels for every entry, index-aligned with `entries`
#[must_use]
pub fn entry_labels(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(entry_label).collect()
}

/// Let the user choose one of `labels`
///
/// Returns `Ok(None)` when the user cancels or when `labels` is empty. The
/// returned index always addresses `labels` itself, so callers index the
/// same slice they built the labels from.
///
/// # Errors
///
/// Returns `InputError` if the terminal interaction fails.
pub fn pick(input: &dyn UserInput, prompt: &str, labels: &[String]) -> Result<Option<Selection>> {
    if labels.is_empty() {
        return Ok(None);
    }

    let selection = input
        .prompt_select(prompt, labels)?
        .and_then(|index| labels.get(index).map(|label| Selection {
            index,
            label: label.clone(),
        }));

    if selection.is_none() {
        tracing::debug!(prompt, "picker cancelled");
    }
    Ok(selection)
}
