//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminals (colored when allowed)
//! - [`MockUI`] recording every call for tests
//!
//! # Example
//!
//! ```
//! use i_installer::ui::{MockUI, OutputMode, UserInterface};
//!
//! let mut ui = MockUI::with_mode(OutputMode::Quiet);
//! ui.info("resolving managers");
//! ui.success("htop installed");
//! assert!(ui.infos().is_empty());
//! assert!(ui.has_success("htop"));
//! ```

pub mod mock;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a plain line (listings, usage). Always shown.
    fn message(&mut self, msg: &str);

    /// Print an `[info]` line. Suppressed in quiet mode.
    fn info(&mut self, msg: &str);

    /// Print an `[ok]` line.
    fn success(&mut self, msg: &str);

    /// Print a `[warn]` line.
    fn warning(&mut self, msg: &str);

    /// Print an `[error]` line.
    fn error(&mut self, msg: &str);

    /// Label the output that follows, e.g. one manager's listing.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question. Non-interactive sessions answer `false`.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
