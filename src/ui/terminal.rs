//! Terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::{prompts, OutputMode, Theme, UserInterface};

/// Terminal UI writing results to stdout and problems to stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme: Theme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.is_interactive() {
            tracing::debug!("not a terminal, answering no to '{}'", question);
            return Ok(false);
        }
        prompts::confirm(question, default, &self.term)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term() && std::io::stdin().is_terminal()
    }
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
