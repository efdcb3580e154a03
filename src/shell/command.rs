//! Spawning package-manager commands.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::privilege::Escalation;
use crate::detection::{PathProbe, Probe};
use crate::error::{InstallerError, Result};
use crate::ui::Theme;

/// One command to spawn. Built right before the spawn, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub argv: Vec<String>,
    pub requires_privilege: bool,
    /// Suppress the `executing:` trace line. Child output is unaffected.
    pub quiet: bool,
}

impl ExecutionRequest {
    pub fn new(argv: Vec<String>, requires_privilege: bool) -> Self {
        Self {
            argv,
            requires_privilege,
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The command as a single line.
    pub fn display(&self) -> String {
        self.argv.join(" ")
    }
}

/// Exit status of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,
    pub success: bool,
}

impl ExecutionOutcome {
    pub fn from_code(code: Option<i32>) -> Self {
        Self {
            code,
            success: code == Some(0),
        }
    }
}

/// Runs [`ExecutionRequest`]s.
pub trait Executor {
    /// Spawn the command and wait for it.
    ///
    /// A non-zero exit is an `Ok` outcome; failing to start is an error.
    fn run(&mut self, request: &ExecutionRequest) -> Result<ExecutionOutcome>;

    /// Like [`Executor::run`] but a non-zero exit becomes `CommandFailed`.
    fn run_checked(&mut self, request: &ExecutionRequest) -> Result<()> {
        let outcome = self.run(request)?;
        if outcome.success {
            Ok(())
        } else {
            Err(InstallerError::CommandFailed {
                command: request.display(),
                code: outcome.code,
            })
        }
    }
}

/// Executor that spawns real processes with inherited stdio.
pub struct ProcessExecutor {
    escalation: Escalation,
    probe: PathProbe,
    theme: Theme,
}

impl ProcessExecutor {
    pub fn new(escalation: Escalation) -> Self {
        Self {
            escalation,
            probe: PathProbe::new(),
            theme: Theme::detect(),
        }
    }

    /// Executor with escalation detected from the current process.
    pub fn detect() -> Self {
        let probe = PathProbe::new();
        let escalation = Escalation::detect(&probe);
        Self {
            escalation,
            probe,
            theme: Theme::detect(),
        }
    }


    /// The `executing:` line for a request, `None` when quiet.
    fn trace_line(&self, request: &ExecutionRequest, command_line: &str) -> Option<String> {
        (!request.quiet).then(|| self.theme.format_executing(command_line))
    }

    /// Resolve the program through the search path so Windows shims
    /// (`choco.cmd`, `scoop.ps1` wrappers) are found by full name.
    fn program_path(&self, program: &str) -> PathBuf {
        self.probe
            .probe(program)
            .unwrap_or_else(|| PathBuf::from(program))
    }
}

impl Executor for ProcessExecutor {
    fn run(&mut self, request: &ExecutionRequest) -> Result<ExecutionOutcome> {
        let argv = self
            .escalation
            .apply(&request.argv, request.requires_privilege)?;
        let command_line = argv.join(" ");

        let Some((program, args)) = argv.split_first() else {
            return Err(InstallerError::CommandFailed {
                command: command_line,
                code: None,
            });
        };

        if let Some(line) = self.trace_line(request, &command_line) {
            println!("{}", line);
        }
        tracing::debug!("spawning {:?}", argv);

        let status = Command::new(self.program_path(program))
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::debug!("failed to start '{}': {}", command_line, e);
                InstallerError::CommandFailed {
                    command: command_line.clone(),
                    code: None,
                }
            })?;

        tracing::debug!("'{}' exited with {:?}", command_line, status.code());
        Ok(ExecutionOutcome::from_code(status.code()))
    }
}
