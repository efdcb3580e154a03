//! Facts about the host that drive manager resolution.

use std::path::Path;

use super::os::{OsFamily, OsRelease};
use crate::catalog::Catalog;

/// The name the tool is normally invoked as.
pub const GENERIC_NAME: &str = "i";

/// Everything the resolver needs to know about this run.
///
/// Built once from the environment; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionContext {
    /// OS id, e.g. `"linux"` or `"windows"`.
    pub operating_system_id: String,
    /// os-release `ID`, Linux only.
    pub distro_id: Option<String>,
    /// os-release `ID_LIKE`, tried when `distro_id` is not recognized.
    pub distro_like: Vec<String>,
    /// Manager requested with `--<id>`.
    pub forced_manager_id: Option<String>,
    /// Manager implied by the executable name (`apt-i`).
    pub binary_alias: Option<String>,
}

impl DetectionContext {
    /// A context for the given OS with nothing else known.
    pub fn new(operating_system_id: impl Into<String>) -> Self {
        Self {
            operating_system_id: operating_system_id.into(),
            ..Default::default()
        }
    }

    /// A context describing the current host.
    pub fn from_host(forced_manager_id: Option<String>, binary_alias: Option<String>) -> Self {
        let os = std::env::consts::OS;
        let release = match OsFamily::from_id(os) {
            OsFamily::Linux => OsRelease::read().unwrap_or_default(),
            _ => OsRelease::default(),
        };

        Self {
            operating_system_id: os.to_string(),
            distro_id: release.id,
            distro_like: release.id_like,
            forced_manager_id,
            binary_alias,
        }
    }

    /// Set the distribution id.
    pub fn with_distro(mut self, distro_id: &str) -> Self {
        self.distro_id = Some(distro_id.to_string());
        self
    }

    /// Set the distribution family ids.
    pub fn with_distro_like(mut self, like: &[&str]) -> Self {
        self.distro_like = like.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Force a manager.
    pub fn with_forced_manager(mut self, id: &str) -> Self {
        self.forced_manager_id = Some(id.to_string());
        self
    }

    /// Set the invoked-as alias.
    pub fn with_binary_alias(mut self, id: &str) -> Self {
        self.binary_alias = Some(id.to_string());
        self
    }

    /// Distribution ids to try against the distro table, most specific first.
    pub fn distro_candidates(&self) -> impl Iterator<Item = &str> {
        self.distro_id
            .iter()
            .chain(self.distro_like.iter())
            .map(String::as_str)
    }
}

/// Derive the manager implied by the executable name.
///
/// `apt-i` (or `apt-i.exe`) names `apt`; the generic name and anything
/// that is not `<catalog id>-i` name nothing.
///
/// # Example
///
/// ```
/// use i_installer::catalog::Catalog;
/// use i_installer::detection::alias_from_program;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(alias_from_program("/usr/local/bin/apt-i", &catalog), Some("apt".to_string()));
/// assert_eq!(alias_from_program("/usr/local/bin/i", &catalog), None);
/// ```
pub fn alias_from_program(program: &str, catalog: &Catalog) -> Option<String> {
    let stem = Path::new(program).file_stem()?.to_str()?;
    if stem == GENERIC_NAME {
        return None;
    }

    let id = stem.strip_suffix(&format!("-{}", GENERIC_NAME))?;
    if id != GENERIC_NAME && catalog.contains(id) {
        Some(id.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let ctx = DetectionContext::new("linux")
            .with_distro("ubuntu")
            .with_distro_like(&["debian"])
            .with_forced_manager("snap")
            .with_binary_alias("apt");

        assert_eq!(ctx.operating_system_id, "linux");
        assert_eq!(ctx.distro_id.as_deref(), Some("ubuntu"));
        assert_eq!(ctx.distro_like, vec!["debian"]);
        assert_eq!(ctx.forced_manager_id.as_deref(), Some("snap"));
        assert_eq!(ctx.binary_alias.as_deref(), Some("apt"));
    }

    #[test]
    fn distro_candidates_put_id_first() {
        let ctx = DetectionContext::new("linux")
            .with_distro("rocky")
            .with_distro_like(&["rhel", "fedora"]);
        let candidates: Vec<_> = ctx.distro_candidates().collect();
        assert_eq!(candidates, vec!["rocky", "rhel", "fedora"]);
    }

    #[test]
    fn from_host_uses_current_os() {
        let ctx = DetectionContext::from_host(None, None);
        assert_eq!(ctx.operating_system_id, std::env::consts::OS);
    }

    #[test]
    fn alias_from_manager_symlink() {
        let catalog = Catalog::builtin();
        assert_eq!(alias_from_program("apt-i", &catalog), Some("apt".to_string()));
        assert_eq!(
            alias_from_program("/home/me/bin/nix-env-i", &catalog),
            Some("nix-env".to_string())
        );
        assert_eq!(
            alias_from_program("C:\\tools\\winget-i.exe", &catalog).is_some(),
            cfg!(windows)
        );
    }

    #[test]
    fn alias_ignores_generic_and_unknown_names() {
        let catalog = Catalog::builtin();
        assert_eq!(alias_from_program("i", &catalog), None);
        assert_eq!(alias_from_program("i-i", &catalog), None);
        assert_eq!(alias_from_program("foo-i", &catalog), None);
        assert_eq!(alias_from_program("apt", &catalog), None);
    }
}
