//! Command implementations
//!
//! Each command is a module with an execute function that takes the store
//! and the UI collaborators it needs, so tests can drive it without a
//! terminal.

pub mod delete;
pub mod list;
pub mod new;

// Re-export execute functions for convenience
pub use delete::execute as delete;
pub use list::execute as list;
pub use new::execute as new;
