//! Turning a verb into package-manager processes.
//!
//! - [`Action`]: the manager-agnostic request
//! - [`Dispatcher`]: resolution, refresh, single runs and fan-out
//! - [`CommandResult`] / [`FanOutReport`]: what happened

pub mod action;
pub mod engine;
pub mod result;

pub use action::Action;
pub use engine::{usage, Dispatcher};
pub use result::{CommandResult, FanOutReport};
