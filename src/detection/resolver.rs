//! Manager resolution.
//!
//! Turns a [`DetectionContext`] into the ordered, de-duplicated list of
//! usable managers. The first entry is the primary manager.
//!
//! Resolution order:
//! 1. A forced manager (`--pacman`) wins outright and is not probed.
//! 2. An invoked-as alias (`apt-i`) is used the same way.
//! 3. Otherwise candidates are probed per OS. On Linux the distro's native
//!    manager goes first, then every common manager that is present, since
//!    hosts routinely carry apt alongside flatpak and snap.

use std::path::PathBuf;

use super::context::{DetectionContext, GENERIC_NAME};
use super::os::OsFamily;
use super::probe::Probe;
use crate::catalog::{Catalog, ManagerDescriptor};
use crate::error::{InstallerError, Result};

/// Windows managers, probe order fixed.
const WINDOWS_MANAGERS: &[&str] = &["winget", "choco"];

/// macOS managers; both may be present.
const MACOS_MANAGERS: &[&str] = &["brew", "port"];

/// Common Linux managers, probed after the distro's native one.
const LINUX_MANAGERS: &[&str] = &[
    "apt", "dnf", "pacman", "snap", "flatpak", "zypper", "yum", "apk", "xbps", "emerge", "nix-env",
];

/// Distribution id → native manager id.
const DISTRO_MANAGERS: &[(&str, &str)] = &[
    ("ubuntu", "apt"),
    ("debian", "apt"),
    ("linuxmint", "apt"),
    ("pop", "apt"),
    ("elementary", "apt"),
    ("kali", "apt"),
    ("raspbian", "apt"),
    ("zorin", "apt"),
    ("fedora", "dnf"),
    ("rhel", "dnf"),
    ("centos", "dnf"),
    ("rocky", "dnf"),
    ("almalinux", "dnf"),
    ("arch", "pacman"),
    ("manjaro", "pacman"),
    ("endeavouros", "pacman"),
    ("instantos", "pacman"),
    ("garuda", "pacman"),
    ("opensuse", "zypper"),
    ("sles", "zypper"),
    ("alpine", "apk"),
    ("void", "xbps"),
    ("gentoo", "emerge"),
    ("nixos", "nix-env"),
];

/// Native manager for a distribution id.
pub fn distro_manager(distro_id: &str) -> Option<&'static str> {
    if distro_id.starts_with("opensuse") {
        return Some("zypper");
    }
    DISTRO_MANAGERS
        .iter()
        .find(|(distro, _)| *distro == distro_id)
        .map(|(_, manager)| *manager)
}

/// A manager that is usable in this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedManager {
    pub id: String,
    pub executable_path: PathBuf,
}

impl ResolvedManager {
    /// A manager the caller asserted is present; its path is the bare binary name.
    fn assumed(descriptor: &ManagerDescriptor) -> Self {
        Self {
            id: descriptor.id.to_string(),
            executable_path: PathBuf::from(descriptor.binary),
        }
    }
}

/// Outcome of resolution: the primary manager plus every usable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub primary: ResolvedManager,
    /// All usable managers in resolution order; `all[0] == primary`.
    pub all: Vec<ResolvedManager>,
}

impl Resolution {
    /// Build from candidates, dropping duplicate ids but keeping first-seen order.
    ///
    /// Returns `None` when there are no candidates.
    pub fn from_candidates(candidates: Vec<ResolvedManager>) -> Option<Self> {
        let mut all: Vec<ResolvedManager> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !all.iter().any(|m| m.id == candidate.id) {
                all.push(candidate);
            }
        }
        let primary = all.first()?.clone();
        Some(Self { primary, all })
    }

    /// Whether `id` is the primary manager.
    pub fn is_primary(&self, id: &str) -> bool {
        self.primary.id == id
    }
}

/// Resolves usable managers against a catalog and a probe.
pub struct ManagerResolver<'a> {
    catalog: Catalog,
    probe: &'a dyn Probe,
}

impl<'a> ManagerResolver<'a> {
    pub fn new(catalog: Catalog, probe: &'a dyn Probe) -> Self {
        Self { catalog, probe }
    }

    /// Resolve the managers for this run.
    ///
    /// # Errors
    ///
    /// - `UnknownManager` if a forced manager or alias is not in the catalog
    /// - `MissingTemplate` if a built-in candidate list names an unknown id
    /// - `NoManagerFound` if nothing usable was found
    pub fn resolve(&self, ctx: &DetectionContext) -> Result<Resolution> {
        if let Some(id) = ctx.forced_manager_id.as_deref() {
            let descriptor = self.catalog.lookup(id)?;
            tracing::debug!("using forced manager '{}' without probing", id);
            return Ok(self.single(descriptor));
        }

        if let Some(id) = ctx.binary_alias.as_deref().filter(|id| *id != GENERIC_NAME) {
            let descriptor = self.catalog.lookup(id)?;
            tracing::debug!("using manager '{}' from invoked name", id);
            return Ok(self.single(descriptor));
        }

        let mut found = Vec::new();
        match OsFamily::from_id(&ctx.operating_system_id) {
            OsFamily::Windows => self.probe_all(WINDOWS_MANAGERS, &mut found)?,
            OsFamily::MacOs => self.probe_all(MACOS_MANAGERS, &mut found)?,
            OsFamily::Linux => {
                if let Some(native) = ctx.distro_candidates().find_map(distro_manager) {
                    tracing::debug!("distro maps to native manager '{}'", native);
                    self.probe_one(native, &mut found)?;
                }
                self.probe_all(LINUX_MANAGERS, &mut found)?;
            }
            OsFamily::Other => {
                tracing::debug!(
                    "no candidate managers for OS '{}'",
                    ctx.operating_system_id
                );
            }
        }

        let resolution =
            Resolution::from_candidates(found).ok_or_else(|| InstallerError::NoManagerFound {
                os: ctx.operating_system_id.clone(),
            })?;

        tracing::debug!(
            "resolved managers: {}",
            resolution
                .all
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(resolution)
    }

    fn single(&self, descriptor: &ManagerDescriptor) -> Resolution {
        let manager = ResolvedManager::assumed(descriptor);
        Resolution {
            primary: manager.clone(),
            all: vec![manager],
        }
    }

    fn probe_all(&self, ids: &[&str], found: &mut Vec<ResolvedManager>) -> Result<()> {
        for id in ids {
            self.probe_one(id, found)?;
        }
        Ok(())
    }

    fn probe_one(&self, id: &str, found: &mut Vec<ResolvedManager>) -> Result<()> {
        let descriptor = self.catalog.require(id)?;
        if found.iter().any(|m| m.id == descriptor.id) {
            return Ok(());
        }
        if let Some(path) = self.probe.probe(descriptor.binary) {
            found.push(ResolvedManager {
                id: descriptor.id.to_string(),
                executable_path: path,
            });
        }
        Ok(())
    }
}
