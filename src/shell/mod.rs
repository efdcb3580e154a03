//! Process execution and privilege escalation.

pub mod command;
pub mod privilege;
pub mod recording;

pub use command::{ExecutionOutcome, ExecutionRequest, Executor, ProcessExecutor};
pub use privilege::{is_elevated, Escalation, ESCALATION_TOOLS};
pub use recording::RecordingExecutor;
