//! Command catalog: the static table of supported package managers.
//!
//! Managers differ only in data, so each one is a [`ManagerDescriptor`]
//! holding a verb → command template table. One generic substitution and
//! execution path handles all of them.
//!
//! # Example
//!
//! ```
//! use i_installer::catalog::{Catalog, Operation};
//!
//! let catalog = Catalog::builtin();
//! let apt = catalog.lookup("apt").unwrap();
//! let install = apt.template(Operation::Install).unwrap();
//! assert_eq!(install.command, "apt install x");
//! assert!(install.privileged);
//! ```

pub mod builtin;
pub mod operation;

pub use operation::Operation;

use crate::error::{InstallerError, Result};

/// A command-line pattern with an optional standalone `x` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// The command line, e.g. `"apt install x"`.
    pub command: &'static str,
    /// Whether the command must run with superuser privileges.
    pub privileged: bool,
}

/// Per-operation templates for one manager. `None` means unsupported.
#[derive(Debug, Clone, Copy)]
pub struct Templates {
    pub install: Option<Template>,
    pub uninstall: Option<Template>,
    pub upgrade: Option<Template>,
    pub upgrade_all: Option<Template>,
    pub search: Option<Template>,
    pub info: Option<Template>,
    pub list_installed: Option<Template>,
    pub list_upgradable: Option<Template>,
    pub update_index: Option<Template>,
}

/// A supported package manager.
#[derive(Debug, Clone, Copy)]
pub struct ManagerDescriptor {
    /// Identifier used on the command line (`--apt`) and in messages.
    pub id: &'static str,
    /// Executable probed for presence on the search path.
    pub binary: &'static str,
    pub templates: Templates,
}

impl ManagerDescriptor {
    /// Template for an operation, if this manager supports it.
    ///
    /// Empty command strings count as unsupported.
    pub fn template(&self, operation: Operation) -> Option<&Template> {
        let t = &self.templates;
        let slot = match operation {
            Operation::Install => &t.install,
            Operation::Uninstall => &t.uninstall,
            Operation::Upgrade => &t.upgrade,
            Operation::UpgradeAll => &t.upgrade_all,
            Operation::Search => &t.search,
            Operation::Info => &t.info,
            Operation::ListInstalled => &t.list_installed,
            Operation::ListUpgradable => &t.list_upgradable,
            Operation::UpdateIndex => &t.update_index,
        };
        slot.as_ref().filter(|t| !t.command.trim().is_empty())
    }

    /// Template for an operation, or `UnsupportedOperation`.
    pub fn require_template(&self, operation: Operation) -> Result<&Template> {
        self.template(operation)
            .ok_or_else(|| InstallerError::UnsupportedOperation {
                manager: self.id.to_string(),
                operation: operation.to_string(),
            })
    }
}

/// Read-only lookup over a descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    descriptors: &'static [ManagerDescriptor],
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::from_descriptors(builtin::MANAGERS)
    }

    /// A catalog over an arbitrary table.
    pub fn from_descriptors(descriptors: &'static [ManagerDescriptor]) -> Self {
        Self { descriptors }
    }

    /// Look up a user-supplied manager id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownManager` when the id is not in the catalog.
    pub fn lookup(&self, id: &str) -> Result<&'static ManagerDescriptor> {
        self.find(id).ok_or_else(|| InstallerError::UnknownManager { id: id.to_string() })
    }

    /// Look up an id the program itself references.
    ///
    /// # Errors
    ///
    /// Returns `MissingTemplate`: a miss here is a programming error.
    pub fn require(&self, id: &str) -> Result<&'static ManagerDescriptor> {
        self.find(id).ok_or_else(|| InstallerError::MissingTemplate { id: id.to_string() })
    }

    /// Whether the id names a known manager.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// All manager ids, in table order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.descriptors.iter().map(|d| d.id)
    }

    /// All descriptors, in table order.
    pub fn descriptors(&self) -> &'static [ManagerDescriptor] {
        self.descriptors
    }

    fn find(&self, id: &str) -> Option<&'static ManagerDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
