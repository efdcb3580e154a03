//! Per-run settings built from parsed flags.

use crate::ui::OutputMode;

/// Everything the dispatch engine needs to know about how to run.
///
/// Built once in `main` and passed by reference; nothing is global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub output_mode: OutputMode,
    /// Manager named with `--<id>`.
    pub forced_manager: Option<String>,
    /// Manager implied by the invoked name (`apt-i`).
    pub binary_alias: Option<String>,
    pub debug: bool,
}

impl Settings {
    pub fn new(output_mode: OutputMode) -> Self {
        Self {
            output_mode,
            ..Default::default()
        }
    }

    pub fn with_forced_manager(mut self, id: impl Into<String>) -> Self {
        self.forced_manager = Some(id.into());
        self
    }

    pub fn with_binary_alias(mut self, id: impl Into<String>) -> Self {
        self.binary_alias = Some(id.into());
        self
    }

    /// Whether the `executing:` trace line is suppressed.
    pub fn is_quiet(&self) -> bool {
        self.output_mode.is_quiet()
    }
}
