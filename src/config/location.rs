//! Where the `i` binary is installed.

use std::path::PathBuf;

/// Overrides the install directory.
pub const INSTALL_DIR_VAR: &str = "INSTALL_DIR";
/// Overrides the installed file name.
pub const INSTALL_NAME_VAR: &str = "INSTALL_NAME";

pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/bin";
pub const DEFAULT_INSTALL_NAME: &str = "i";

/// Install directory and file name for self-update and self-uninstall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLocation {
    pub dir: PathBuf,
    pub name: String,
    /// Whether `dir` came from `INSTALL_DIR` rather than the default.
    pub dir_overridden: bool,
}

impl Default for InstallLocation {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            name: DEFAULT_INSTALL_NAME.to_string(),
            dir_overridden: false,
        }
    }
}

impl InstallLocation {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read using `lookup` for environment access. Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use i_installer::config::InstallLocation;
    ///
    /// let loc = InstallLocation::from_env_with(|key| match key {
    ///     "INSTALL_DIR" => Some("/opt/bin".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(loc.target(), std::path::PathBuf::from("/opt/bin/i"));
    /// ```
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let dir = non_empty(INSTALL_DIR_VAR).map(PathBuf::from);
        Self {
            dir_overridden: dir.is_some(),
            dir: dir.unwrap_or(defaults.dir),
            name: non_empty(INSTALL_NAME_VAR).unwrap_or(defaults.name),
        }
    }

    /// Full path of the installed binary.
    pub fn target(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let loc = InstallLocation::from_env_with(env(&[]));
        assert_eq!(loc.target(), PathBuf::from("/usr/local/bin/i"));
        assert!(!loc.dir_overridden);
    }

    #[test]
    fn env_overrides_both() {
        let loc = InstallLocation::from_env_with(env(&[
            ("INSTALL_DIR", "/home/me/.local/bin"),
            ("INSTALL_NAME", "pkg"),
        ]));
        assert_eq!(loc.target(), PathBuf::from("/home/me/.local/bin/pkg"));
        assert!(loc.dir_overridden);
    }

    #[test]
    fn empty_values_are_ignored() {
        let loc = InstallLocation::from_env_with(env(&[("INSTALL_DIR", ""), ("INSTALL_NAME", " ")]));
        assert_eq!(loc, InstallLocation::default());
    }
}
