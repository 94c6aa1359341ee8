//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] for capturing output in tests
//! - Wizard prompts, themed output, and table rendering

pub mod mock;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use prompts::{confirm_export, rank_checks, select_checks};
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GpupickTheme};

/// Trait for user interface interactions.
///
/// Commands render through this trait so tests can capture their output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown, regardless of mode.
    fn error(&mut self, msg: &str);

    /// Display a section header.
    fn show_header(&mut self, title: &str);
}
