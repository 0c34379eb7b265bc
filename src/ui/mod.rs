//! UI abstraction layer
//!
//! Prompts, list selection and status output sit behind traits so the
//! command handlers never talk to the terminal directly.
//!
//! # Core Traits
//!
//! - **`UserInput`** - Line prompts and single-choice selection
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! The [`picker`] module builds the entry picker on top of `UserInput`.
//!
//! ## User Input
//!
//! ```no_run
//! use clm::ui::input::{UserInput, DialoguerInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = DialoguerInput::new();
//!
//! if let Some(env) = input.prompt_text("Enter value for env", true)? {
//!     println!("deploy {env}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use clm::ui::output::{OutputWriter, QuietWriter, StdoutWriter};
//!
//! let output = QuietWriter::new(StdoutWriter::new(), true);
//! output.success("Command saved successfully!"); // dropped
//! output.warning("Clipboard unavailable");
//! output.info("No commands found.");
//! ```

pub mod input;
pub mod output;
pub mod picker;

#[cfg(test)]
pub mod mock;

pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{OutputWriter, QuietWriter, StdoutWriter};
pub use picker::{Selection, entry_label, entry_labels, pick};
