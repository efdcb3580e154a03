//! Run configuration.
//!
//! - [`Settings`]: output mode and manager overrides from the command line
//! - [`InstallLocation`]: `INSTALL_DIR` / `INSTALL_NAME` for self-management

pub mod location;
pub mod settings;

pub use location::{
    InstallLocation, DEFAULT_INSTALL_DIR, DEFAULT_INSTALL_NAME, INSTALL_DIR_VAR, INSTALL_NAME_VAR,
};
pub use settings::Settings;
