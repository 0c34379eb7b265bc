//! Output abstraction layer
//!
//! Status messages go through [`OutputWriter`] so quiet mode and tests can
//! intercept them. Results the user asked for (the final command of `list`)
//! are written with [`OutputWriter::write`] and are never suppressed.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use clm::ui::output::{OutputWriter, QuietWriter, StdoutWriter};
///
/// let output = QuietWriter::new(StdoutWriter::new(), false);
/// output.write("docker ps -a");
/// output.success("Command saved successfully!");
/// output.error("Error decoding commands.json");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result line; always shown
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Quiet-mode filter around another writer
///
/// When quiet, success and info messages are dropped; results, warnings
/// and errors still reach the inner writer.
pub struct QuietWriter<W> {
    inner: W,
    quiet: bool,
}

impl<W: OutputWriter> QuietWriter<W> {
    /// Wrap `inner`, suppressing informational output when `quiet` is set
    #[must_use]
    pub const fn new(inner: W, quiet: bool) -> Self {
        Self { inner, quiet }
    }

    /// Whether informational output is suppressed
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The wrapped writer
    #[must_use]
    pub const fn inner(&self) -> &W {
        &self.inner
    }
}

impl<W: OutputWriter> OutputWriter for QuietWriter<W> {
    fn write(&self, message: &str) {
        self.inner.write(message);
    }

    fn error(&self, message: &str) {
        self.inner.error(message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            self.inner.success(message);
        }
    }

    fn warning(&self, message: &str) {
        self.inner.warning(message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            self.inner.info(message);
        }
    }
}
