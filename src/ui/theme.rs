//! Visual theme and styling.

use console::Style;

/// Whether colored output should be used.
///
/// Honors the NO_COLOR convention and falls back to plain text when stdout
/// is not a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

/// Gpupick's visual theme.
#[derive(Debug, Clone)]
pub struct GpupickTheme {
    /// Style for success messages and covered checks (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages and uncovered checks (red bold).
    pub error: Style,
    /// Style for dim/secondary text (ranks, counts, descriptions).
    pub dim: Style,
    /// Style for highlighted/important text (tool names).
    pub highlight: Style,
    /// Style for section headers (cyan bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for coverage bars (cyan).
    pub bar: Style,
}

impl Default for GpupickTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GpupickTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
            bar: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            bar: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a covered-check line.
    pub fn format_covered(&self, check: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), check)
    }

    /// Format an uncovered-check line.
    pub fn format_uncovered(&self, check: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), check)
    }

    /// Render a fixed-width coverage bar for a ratio in `[0.0, 1.0]`.
    pub fn coverage_bar(&self, ratio: f64, width: usize) -> String {
        let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
        format!(
            "{}{}",
            self.bar.apply_to("█".repeat(filled)),
            self.dim.apply_to("░".repeat(width - filled))
        )
    }
}
