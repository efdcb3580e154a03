//! What the user asked for, independent of any package manager.

use crate::catalog::Operation;

/// A parsed verb with its package argument.
///
/// Package-taking verbs carry `Option<String>` so a missing package can be
/// answered with usage text instead of a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Install(Option<String>),
    Uninstall(Option<String>),
    /// `None` upgrades everything on every detected manager.
    Upgrade(Option<String>),
    Search(Option<String>),
    Info(Option<String>),
    ListInstalled,
    ListUpgradable,
    Reinstall(Option<String>),
    /// Every manager in the catalog.
    PmList,
    /// Every manager detected on this host.
    Pms,
    SelfUpdate,
    SelfUninstall,
    /// A verb nobody recognized.
    Unknown(String),
}

impl Action {
    /// The canonical verb, as typed on the command line.
    pub fn verb(&self) -> &str {
        match self {
            Self::Install(_) => "install",
            Self::Uninstall(_) => "uninstall",
            Self::Upgrade(_) => "upgrade",
            Self::Search(_) => "search",
            Self::Info(_) => "info",
            Self::ListInstalled => "list",
            Self::ListUpgradable => "outdated",
            Self::Reinstall(_) => "reinstall",
            Self::PmList => "pmlist",
            Self::Pms => "pms",
            Self::SelfUpdate => "selfup",
            Self::SelfUninstall => "selfun",
            Self::Unknown(verb) => verb,
        }
    }

    /// The package argument, for verbs that take one.
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::Install(p)
            | Self::Uninstall(p)
            | Self::Upgrade(p)
            | Self::Search(p)
            | Self::Info(p)
            | Self::Reinstall(p) => p.as_deref(),
            _ => None,
        }
    }

    /// Whether the verb cannot run without a package name.
    pub fn requires_package(&self) -> bool {
        matches!(
            self,
            Self::Install(_) | Self::Uninstall(_) | Self::Search(_) | Self::Info(_) | Self::Reinstall(_)
        )
    }

    /// Whether the verb needs the detected managers.
    pub fn needs_resolution(&self) -> bool {
        !matches!(
            self,
            Self::PmList | Self::SelfUpdate | Self::SelfUninstall | Self::Reinstall(_) | Self::Unknown(_)
        )
    }

    /// Whether the primary manager's index is refreshed first.
    pub fn refreshes_index(&self) -> bool {
        matches!(self, Self::Install(_) | Self::Search(_) | Self::Upgrade(_))
    }

    /// The catalog operation this verb runs, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Install(_) => Some(Operation::Install),
            Self::Uninstall(_) => Some(Operation::Uninstall),
            Self::Upgrade(Some(_)) => Some(Operation::Upgrade),
            Self::Upgrade(None) => Some(Operation::UpgradeAll),
            Self::Search(_) => Some(Operation::Search),
            Self::Info(_) => Some(Operation::Info),
            Self::ListInstalled => Some(Operation::ListInstalled),
            Self::ListUpgradable => Some(Operation::ListUpgradable),
            _ => None,
        }
    }

    /// Whether the verb runs on every detected manager.
    pub fn fans_out(&self) -> bool {
        matches!(
            self,
            Self::Upgrade(None) | Self::ListInstalled | Self::ListUpgradable
        )
    }
}
