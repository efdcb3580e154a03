//! Visual theme and styling.

use console::Style;

/// Styles for the bracketed status prefixes.
#[derive(Debug, Clone)]
pub struct Theme {
    /// `[info]` lines (cyan).
    pub info: Style,
    /// `[ok]` lines (green).
    pub success: Style,
    /// `[warn]` lines (yellow).
    pub warning: Style,
    /// `[error]` lines (red bold).
    pub error: Style,
    /// Section headers (bold).
    pub header: Style,
    /// Commands echoed before execution (dim).
    pub command: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            info: Style::new().cyan(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            command: Style::new().dim(),
        }
    }

    /// A theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            info: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Colored when [`should_use_colors`] says so, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_info(&self, msg: &str) -> String {
        format!("{} {}", self.info.apply_to("[info]"), msg)
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("[ok]"), msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("[warn]"), msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("[error]"), msg)
    }

    /// The trace line printed before a command is spawned.
    pub fn format_executing(&self, command: &str) -> String {
        self.format_info(&format!("executing: {}", self.command.apply_to(command)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("==> {}", title)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
