//! Self-management: updating and removing the `i` binary itself.
//!
//! This module provides:
//! - Release asset selection and the GitHub latest-release lookup
//! - Download and install with a privileged fallback
//! - Locating and removing the installed binary

pub mod install;
pub mod release;
pub mod uninstall;

pub use install::{install_binary, self_update};
pub use release::{
    asset_name_for, current_asset_name, Asset, Release, ReleaseClient, GITHUB_API_BASE,
    REPOSITORY, VERSION,
};
pub use uninstall::{find_target, self_uninstall, UninstallOutcome, FALLBACK_DIRS};

use crate::config::InstallLocation;
use crate::detection::PathProbe;
use crate::error::Result;
use crate::shell::Executor;
use crate::ui::UserInterface;

/// The `selfup` / `selfun` entry points.
///
/// The dispatch engine only sees success or failure, so it can be tested
/// without network or filesystem effects.
pub trait SelfManager {
    /// Replace the installed binary with the latest release.
    fn self_update(&mut self, ui: &mut dyn UserInterface, executor: &mut dyn Executor)
        -> Result<()>;

    /// Remove the installed binary. `Ok(false)` means the user declined.
    fn self_uninstall(
        &mut self,
        ui: &mut dyn UserInterface,
        executor: &mut dyn Executor,
    ) -> Result<bool>;
}

/// Self-management against the real host.
#[derive(Debug, Clone)]
pub struct HostSelfManager {
    location: InstallLocation,
    api_base: String,
}

impl HostSelfManager {
    /// Uses `INSTALL_DIR` / `INSTALL_NAME` and the public GitHub API.
    pub fn from_env() -> Self {
        Self {
            location: InstallLocation::from_env(),
            api_base: GITHUB_API_BASE.to_string(),
        }
    }

    pub fn new(location: InstallLocation, api_base: impl Into<String>) -> Self {
        Self {
            location,
            api_base: api_base.into(),
        }
    }
}

impl SelfManager for HostSelfManager {
    fn self_update(
        &mut self,
        ui: &mut dyn UserInterface,
        executor: &mut dyn Executor,
    ) -> Result<()> {
        let client = ReleaseClient::with_api_base(self.api_base.as_str())?;
        self_update(&client, &self.location, ui, executor).map(|_| ())
    }

    fn self_uninstall(
        &mut self,
        ui: &mut dyn UserInterface,
        executor: &mut dyn Executor,
    ) -> Result<bool> {
        let outcome = self_uninstall(&self.location, &PathProbe::new(), ui, executor)?;
        Ok(outcome != UninstallOutcome::Aborted)
    }
}
