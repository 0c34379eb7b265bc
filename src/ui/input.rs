//! User input abstraction layer
//!
//! Line prompts and list selection go through [`UserInput`] so the command
//! handlers can be driven by a scripted implementation in tests and by
//! `dialoguer` in the terminal.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use clm::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(title) = input.prompt_text("Enter command title", true).unwrap() {
///     println!("Title: {}", title);
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for one line of text
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `allow_empty` - Whether empty input is allowed
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<Option<String>>;

    /// Prompt user to select one item from a list
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `items` - List of items to choose from; the first is highlighted
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Index of selected item within `items`
    /// * `Ok(None)` - User cancelled (Esc, `q`, interrupt)
    /// * `Err(_)` - Input operation failed
    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

/// An interrupt while the prompt is active is a cancellation, not a failure
fn cancelled_or_err<T>(err: dialoguer::Error) -> Result<Option<T>> {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            tracing::debug!("prompt interrupted");
            Ok(None)
        }
        other => Err(InputError::Io(io::Error::other(other))),
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<Option<String>> {
        use dialoguer::Input;

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text().map(Some).or_else(cancelled_or_err)
    }

    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0);

        if items.len() > 15 {
            select = select.max_length(15);
        }

        select.interact_opt().or_else(cancelled_or_err)
    }
}
