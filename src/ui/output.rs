//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status lines and the `executing:` trace.
    #[default]
    Normal,
    /// Only results, warnings and errors. Child output is never hidden.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--quiet` / `--silent` / `-q` flag.
    pub fn from_quiet_flag(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Whether informational lines are printed.
    pub fn shows_info(&self) -> bool {
        matches!(self, Self::Normal)
    }

    pub fn is_quiet(&self) -> bool {
        matches!(self, Self::Quiet)
    }
}
