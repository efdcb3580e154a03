//! Manager-agnostic operations a template can implement.

use std::fmt;

/// An operation that maps to one command template per manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Install,
    Uninstall,
    /// Upgrade a single package.
    Upgrade,
    /// Upgrade everything the manager installed.
    UpgradeAll,
    Search,
    Info,
    ListInstalled,
    ListUpgradable,
    /// Refresh the manager's view of remote package metadata.
    UpdateIndex,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 9] = [
        Operation::Install,
        Operation::Uninstall,
        Operation::Upgrade,
        Operation::UpgradeAll,
        Operation::Search,
        Operation::Info,
        Operation::ListInstalled,
        Operation::ListUpgradable,
        Operation::UpdateIndex,
    ];

    /// Operations every descriptor must define.
    pub const REQUIRED: [Operation; 7] = [
        Operation::Install,
        Operation::Uninstall,
        Operation::Upgrade,
        Operation::UpgradeAll,
        Operation::Search,
        Operation::Info,
        Operation::ListInstalled,
    ];

    /// Stable name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Install => "install",
            Operation::Uninstall => "uninstall",
            Operation::Upgrade => "upgrade",
            Operation::UpgradeAll => "upgrade-all",
            Operation::Search => "search",
            Operation::Info => "info",
            Operation::ListInstalled => "list-installed",
            Operation::ListUpgradable => "list-upgradable",
            Operation::UpdateIndex => "update-index",
        }
    }

    /// Whether the template for this operation takes a package name.
    pub fn takes_package(&self) -> bool {
        matches!(
            self,
            Operation::Install
                | Operation::Uninstall
                | Operation::Upgrade
                | Operation::Search
                | Operation::Info
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_is_subset_of_all() {
        for op in Operation::REQUIRED {
            assert!(Operation::ALL.contains(&op));
        }
    }

    #[test]
    fn package_taking_operations() {
        assert!(Operation::Install.takes_package());
        assert!(Operation::Info.takes_package());
        assert!(!Operation::UpgradeAll.takes_package());
        assert!(!Operation::ListInstalled.takes_package());
        assert!(!Operation::UpdateIndex.takes_package());
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(Operation::UpgradeAll.to_string(), "upgrade-all");
        assert_eq!(Operation::ListUpgradable.to_string(), "list-upgradable");
    }
}
