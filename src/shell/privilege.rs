//! Superuser escalation.
//!
//! Templates say whether they need root; this module decides how to get it.

use crate::detection::Probe;
use crate::error::{InstallerError, Result};

/// Escalation wrappers, in order of preference.
pub const ESCALATION_TOOLS: [&str; 2] = ["sudo", "doas"];

/// How privileged commands are run in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Effective uid is already 0; run as-is.
    AlreadyElevated,
    /// Prefix privileged commands with this tool.
    Wrapper(&'static str),
    /// No way to elevate. Privileged commands fail.
    Unavailable,
}

impl Escalation {
    /// Decide escalation for the current process.
    pub fn detect(probe: &dyn Probe) -> Self {
        if is_elevated() {
            tracing::debug!("running elevated, no escalation wrapper needed");
            return Self::AlreadyElevated;
        }
        Self::from_probe(probe)
    }

    /// Pick the first available wrapper, ignoring the current uid.
    pub fn from_probe(probe: &dyn Probe) -> Self {
        match ESCALATION_TOOLS
            .iter()
            .find(|tool| probe.is_available(tool))
        {
            Some(tool) => {
                tracing::debug!("privileged commands will use {}", tool);
                Self::Wrapper(*tool)
            }
            None => Self::Unavailable,
        }
    }

    /// The argv to actually spawn for `argv`.
    ///
    /// Unprivileged commands pass through untouched.
    ///
    /// # Errors
    ///
    /// `NoPrivilegeEscalationTool` when elevation is needed and unavailable.
    pub fn apply(&self, argv: &[String], requires_privilege: bool) -> Result<Vec<String>> {
        if !requires_privilege {
            return Ok(argv.to_vec());
        }

        match self {
            Self::AlreadyElevated => Ok(argv.to_vec()),
            Self::Wrapper(tool) => {
                let mut wrapped = Vec::with_capacity(argv.len() + 1);
                wrapped.push(tool.to_string());
                wrapped.extend(argv.iter().cloned());
                Ok(wrapped)
            }
            Self::Unavailable => Err(InstallerError::NoPrivilegeEscalationTool {
                command: argv.join(" "),
            }),
        }
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
