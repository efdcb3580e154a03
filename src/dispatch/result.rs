//! Outcomes reported back to `main`.

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Per-manager bookkeeping for a fan-out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
    /// Managers without a template for the operation.
    pub skipped: Vec<String>,
}

impl FanOutReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn into_command_result(self) -> CommandResult {
        if self.is_success() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn report_fails_when_any_manager_failed() {
        let report = FanOutReport {
            succeeded: vec!["apt".into()],
            failed: vec!["snap".into()],
            skipped: vec![],
        };
        assert_eq!(report.into_command_result(), CommandResult::failure(1));
    }

    #[test]
    fn skipped_managers_do_not_fail_the_run() {
        let report = FanOutReport {
            skipped: vec!["snap".into()],
            ..Default::default()
        };
        assert!(report.is_success());
    }
}
