//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. `--<manager>` flags are
//! removed before clap sees the arguments; see [`super::flags`].

use std::ffi::OsString;

use clap::error::ErrorKind as ClapErrorKind;
use clap::{ArgAction, Parser, Subcommand};

use crate::dispatch::Action;
use crate::error::{InstallerError, Result};

/// i - one command line for every package manager.
#[derive(Debug, Parser)]
#[command(name = "i")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "Force a package manager with --<id>, e.g. `i install htop --flatpak`.\n\
Run `i pmlist` to see every supported id.")]
pub struct Cli {
    /// Do not print the commands being executed
    #[arg(short, long, visible_alias = "silent", global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Parse argv without letting clap exit the process.
///
/// `Ok(None)` means help or the version was printed and there is nothing
/// left to do. Usage errors become [`InstallerError::InvalidArguments`]
/// carrying clap's one-line message.
pub fn parse_cli<I, T>(args: I) -> Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                e.print()?;
                Ok(None)
            }
            _ => Err(InstallerError::InvalidArguments {
                message: summary_line(&e.to_string()),
            }),
        },
    }
}

/// First line of a clap error, without its `error: ` prefix.
fn summary_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install a package
    #[command(visible_alias = "add")]
    Install(PackageArgs),

    /// Remove a package
    #[command(visible_aliases = ["remove", "rm", "un"])]
    Uninstall(PackageArgs),

    /// Upgrade one package, or everything on every detected manager
    #[command(visible_aliases = ["update", "up"])]
    Upgrade(PackageArgs),

    /// Search for a package
    #[command(visible_alias = "find")]
    Search(PackageArgs),

    /// Show details about a package
    #[command(visible_alias = "show")]
    Info(PackageArgs),

    /// List installed packages on every detected manager
    #[command(visible_alias = "installed")]
    List,

    /// List upgradable packages on every detected manager
    #[command(visible_aliases = ["updatable", "upgradable", "updateable", "upgradeable"])]
    Outdated,

    /// Not supported; uninstall then install instead
    Reinstall(PackageArgs),

    /// List every supported package manager
    Pmlist,

    /// List the package managers detected on this system
    Pms,

    /// Update i itself to the latest release
    #[command(name = "selfup", visible_aliases = ["selfupdate", "selfupgrade"])]
    SelfUpdate,

    /// Remove i from this system
    #[command(name = "selfun", visible_aliases = ["selfuninstall", "selfdelete"])]
    SelfUninstall,

    /// Print version
    #[command(hide = true)]
    Version,

    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Optional package argument shared by package verbs.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackageArgs {
    /// Package name
    pub package: Option<String>,
}

impl Commands {
    /// The dispatch action for this subcommand. `None` for `version`.
    pub fn into_action(self) -> Option<Action> {
        let action = match self {
            Self::Install(a) => Action::Install(a.package),
            Self::Uninstall(a) => Action::Uninstall(a.package),
            Self::Upgrade(a) => Action::Upgrade(a.package),
            Self::Search(a) => Action::Search(a.package),
            Self::Info(a) => Action::Info(a.package),
            Self::List => Action::ListInstalled,
            Self::Outdated => Action::ListUpgradable,
            Self::Reinstall(a) => Action::Reinstall(a.package),
            Self::Pmlist => Action::PmList,
            Self::Pms => Action::Pms,
            Self::SelfUpdate => Action::SelfUpdate,
            Self::SelfUninstall => Action::SelfUninstall,
            Self::Version => return None,
            Self::Other(args) => Action::Unknown(args.into_iter().next().unwrap_or_default()),
        };
        Some(action)
    }
}
