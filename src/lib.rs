//! i - one command line for every package manager.
//!
//! `i install htop` works the same on Ubuntu, Fedora, Arch, macOS and
//! Windows: the host's package manager is detected and the verb is
//! rendered into that manager's own command line.
//!
//! # Modules
//!
//! - [`catalog`] - Supported managers and their command templates
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Per-run settings and the install location
//! - [`detection`] - Host OS facts and package manager resolution
//! - [`dispatch`] - Verb dispatch, index refresh and fan-out
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Command execution and privilege escalation
//! - [`template`] - Placeholder substitution and package name checks
//! - [`ui`] - Terminal output and prompts
//! - [`updates`] - Self-update and self-uninstall
//!
//! # Example
//!
//! ```
//! use i_installer::catalog::{Catalog, Operation};
//! use i_installer::template::render;
//!
//! let catalog = Catalog::builtin();
//! let apt = catalog.lookup("apt").unwrap();
//! let template = apt.template(Operation::Install).unwrap();
//! let argv = render(template.command, "htop");
//! assert_eq!(argv, vec!["apt", "install", "htop"]);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detection;
pub mod dispatch;
pub mod error;
pub mod shell;
pub mod template;
pub mod ui;
pub mod updates;

pub use error::{InstallerError, Result};
