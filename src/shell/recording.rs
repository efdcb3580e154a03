//! Executor that records instead of spawning.

use std::collections::{HashMap, HashSet};

use super::command::{ExecutionOutcome, ExecutionRequest, Executor};
use super::privilege::Escalation;
use crate::error::{InstallerError, Result};

/// Records every request and answers with scripted exit codes.
///
/// Commands are matched on [`ExecutionRequest::display`], before escalation.
/// Anything not scripted exits 0.
///
/// # Example
///
/// ```
/// use i_installer::shell::{ExecutionRequest, Executor, RecordingExecutor};
///
/// let mut exec = RecordingExecutor::new().with_exit_code("snap refresh", 1);
/// let req = ExecutionRequest::new(vec!["snap".into(), "refresh".into()], false);
/// assert!(!exec.run(&req).unwrap().success);
/// assert_eq!(exec.commands(), vec!["snap refresh"]);
/// ```
#[derive(Debug)]
pub struct RecordingExecutor {
    escalation: Escalation,
    exit_codes: HashMap<String, i32>,
    spawn_failures: HashSet<String>,
    requests: Vec<ExecutionRequest>,
    spawned: Vec<String>,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingExecutor {
    /// Every command succeeds; privileged ones run as if already root.
    pub fn new() -> Self {
        Self {
            escalation: Escalation::AlreadyElevated,
            exit_codes: HashMap::new(),
            spawn_failures: HashSet::new(),
            requests: Vec::new(),
            spawned: Vec::new(),
        }
    }

    pub fn with_escalation(mut self, escalation: Escalation) -> Self {
        self.escalation = escalation;
        self
    }

    /// Make `command` exit with `code`.
    pub fn with_exit_code(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    /// Make `command` fail to start.
    pub fn with_spawn_failure(mut self, command: &str) -> Self {
        self.spawn_failures.insert(command.to_string());
        self
    }

    /// Every request received, including ones refused for privilege.
    pub fn requests(&self) -> &[ExecutionRequest] {
        &self.requests
    }

    /// Commands that were "spawned", as unescalated command lines.
    pub fn commands(&self) -> Vec<&str> {
        self.spawned.iter().map(String::as_str).collect()
    }

    /// Commands that were "spawned", exactly as they would hit the OS.
    pub fn escalated_commands(&self) -> Vec<String> {
        self.requests
            .iter()
            .filter(|r| self.spawned.contains(&r.display()))
            .filter_map(|r| {
                self.escalation
                    .apply(&r.argv, r.requires_privilege)
                    .ok()
                    .map(|argv| argv.join(" "))
            })
            .collect()
    }
}

impl Executor for RecordingExecutor {
    fn run(&mut self, request: &ExecutionRequest) -> Result<ExecutionOutcome> {
        self.requests.push(request.clone());
        self.escalation
            .apply(&request.argv, request.requires_privilege)?;

        let command = request.display();
        if self.spawn_failures.contains(&command) {
            return Err(InstallerError::CommandFailed {
                command,
                code: None,
            });
        }

        let code = self.exit_codes.get(&command).copied().unwrap_or(0);
        self.spawned.push(command);
        Ok(ExecutionOutcome::from_code(Some(code)))
    }
}
