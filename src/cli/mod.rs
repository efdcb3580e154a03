//! Command-line interface for i.
//!
//! # Architecture
//!
//! - [`flags`] - `--<manager>` extraction ahead of clap
//! - [`args`] - Argument definitions using clap derive macros

pub mod args;
pub mod flags;

pub use args::{parse_cli, Cli, Commands, PackageArgs};
pub use flags::{extract_manager_flags, ExtractedArgs, RESERVED_FLAGS};
