//! Error types for installer operations.
//!
//! This module defines [`InstallerError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `InstallerError` for failures that need distinct handling or reporting
//! - Use `anyhow::Error` (via `InstallerError::Other`) for unexpected errors
//! - Every variant renders as a single line; `main` prefixes it with `[error]`

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a failure, used to decide how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Catalog and resolver disagree. A programming error.
    Configuration,
    /// No usable package manager on this host.
    Detection,
    /// Bad user input. Nothing was executed.
    InputValidation,
    /// A spawned command failed or could not start.
    Execution,
    /// Elevation was required but no escalation tool is available.
    Privilege,
    /// Self-update or self-uninstall failed.
    SelfManagement,
}

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// A manager id that is not in the command catalog.
    #[error("Unknown package manager '{id}'. Run 'i pmlist' to see supported managers")]
    UnknownManager { id: String },

    /// A manager id referenced internally has no catalog entry.
    #[error("Package manager '{id}' is referenced but has no command templates")]
    MissingTemplate { id: String },

    /// Probing found no supported package manager.
    #[error("No supported package manager found on this {os} system")]
    NoManagerFound { os: String },

    /// Package name contains characters outside the allow-list.
    #[error("Invalid package name '{name}': only letters, digits and _ - @ . + are allowed")]
    InvalidPackageName { name: String },

    /// The command line could not be parsed.
    #[error("{message}. Run 'i --help' for usage")]
    InvalidArguments { message: String },

    /// The verb is not something this tool can do.
    #[error("'{verb}' sub-command is not supported. Run 'i --help' for the list of commands")]
    UnsupportedVerb { verb: String },

    /// The manager has no template for the requested operation.
    #[error("'{manager}' does not support '{operation}'")]
    UnsupportedOperation { manager: String, operation: String },

    /// A spawned command exited non-zero or failed to start.
    #[error("'{command}' {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Elevation needed but neither sudo nor doas is available.
    #[error("'{command}' needs superuser privileges but neither sudo nor doas was found")]
    NoPrivilegeEscalationTool { command: String },

    /// Self-update failed.
    #[error("Self-update failed: {message}")]
    SelfUpdate { message: String },

    /// Self-uninstall failed.
    #[error("Self-uninstall failed for {}: {message}", .path.display())]
    SelfUninstall { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallerError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTemplate { .. } => ErrorKind::Configuration,
            Self::NoManagerFound { .. } => ErrorKind::Detection,
            Self::UnknownManager { .. }
            | Self::InvalidArguments { .. }
            | Self::InvalidPackageName { .. }
            | Self::UnsupportedVerb { .. }
            | Self::UnsupportedOperation { .. } => ErrorKind::InputValidation,
            Self::CommandFailed { .. } | Self::Io(_) | Self::Other(_) => ErrorKind::Execution,
            Self::NoPrivilegeEscalationTool { .. } => ErrorKind::Privilege,
            Self::SelfUpdate { .. } | Self::SelfUninstall { .. } => ErrorKind::SelfManagement,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "could not be started or was terminated".to_string(),
    }
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_manager_displays_id() {
        let err = InstallerError::UnknownManager { id: "aptitude".into() };
        assert!(err.to_string().contains("aptitude"));
        assert_eq!(err.kind(), ErrorKind::InputValidation);
    }

    #[test]
    fn invalid_arguments_points_at_help() {
        let err = InstallerError::InvalidArguments {
            message: "unexpected argument 'extra' found".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected argument 'extra' found. Run 'i --help' for usage"
        );
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn no_manager_found_is_detection_error() {
        let err = InstallerError::NoManagerFound { os: "linux".into() };
        assert!(err.to_string().contains("linux"));
        assert_eq!(err.kind(), ErrorKind::Detection);
    }

    #[test]
    fn missing_template_is_configuration_error() {
        let err = InstallerError::MissingTemplate { id: "ghost".into() };
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = InstallerError::CommandFailed {
            command: "apt install -y htop".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt install -y htop"));
        assert!(msg.contains("100"));
        assert_eq!(err.kind(), ErrorKind::Execution);
    }

    #[test]
    fn privilege_error_mentions_escalation_tools() {
        let err = InstallerError::NoPrivilegeEscalationTool {
            command: "apt update".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sudo"));
        assert!(msg.contains("doas"));
        assert_eq!(err.kind(), ErrorKind::Privilege);
    }

    #[test]
    fn unsupported_operation_displays_manager_and_operation() {
        let err = InstallerError::UnsupportedOperation {
            manager: "snap".into(),
            operation: "list-upgradable".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("snap"));
        assert!(msg.contains("list-upgradable"));
    }

    #[test]
    fn self_uninstall_displays_path() {
        let err = InstallerError::SelfUninstall {
            path: PathBuf::from("/usr/local/bin/i"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/local/bin/i"));
        assert!(msg.contains("permission denied"));
        assert_eq!(err.kind(), ErrorKind::SelfManagement);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InstallerError = io_err.into();
        assert!(matches!(err, InstallerError::Io(_)));
    }

    #[test]
    fn every_error_exits_with_one() {
        let err = InstallerError::UnsupportedVerb {
            verb: "frobnicate".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
