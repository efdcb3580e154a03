//! `--<manager>` flag extraction.
//!
//! Manager flags are open-ended (one per catalog id), so they are pulled out
//! of argv before clap parses the rest.

use crate::catalog::Catalog;
use crate::detection::GENERIC_NAME;
use crate::error::{InstallerError, Result};

/// Long flags that belong to clap, never to a manager.
pub const RESERVED_FLAGS: [&str; 5] = ["quiet", "silent", "debug", "help", "version"];

/// argv with manager flags removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArgs {
    /// Remaining arguments, program name first.
    pub args: Vec<String>,
    /// The last `--<id>` given.
    pub forced_manager: Option<String>,
}

/// Split `--<id>` flags out of `argv`.
///
/// Arguments after a bare `--` are left alone.
///
/// # Errors
///
/// `UnknownManager` for a `--name` that is neither reserved nor a catalog id.
///
/// # Example
///
/// ```
/// use i_installer::catalog::Catalog;
/// use i_installer::cli::extract_manager_flags;
///
/// let argv = ["i", "install", "--flatpak", "gimp"].map(String::from);
/// let out = extract_manager_flags(argv, &Catalog::builtin()).unwrap();
/// assert_eq!(out.args, vec!["i", "install", "gimp"]);
/// assert_eq!(out.forced_manager.as_deref(), Some("flatpak"));
/// ```
pub fn extract_manager_flags<I>(argv: I, catalog: &Catalog) -> Result<ExtractedArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Vec::new();
    let mut forced_manager = None;
    let mut passthrough = false;

    for (index, arg) in argv.into_iter().enumerate() {
        if index == 0 || passthrough {
            args.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            args.push(arg);
            continue;
        }

        match manager_flag(&arg) {
            Some(name) if RESERVED_FLAGS.contains(&name) => args.push(arg),
            Some(name) if name != GENERIC_NAME && catalog.contains(name) => {
                if let Some(previous) = forced_manager.replace(name.to_string()) {
                    tracing::debug!("--{} overrides --{}", name, previous);
                }
            }
            Some(name) => {
                return Err(InstallerError::UnknownManager {
                    id: name.to_string(),
                })
            }
            None => args.push(arg),
        }
    }

    Ok(ExtractedArgs {
        args,
        forced_manager,
    })
}

/// `--name` → `name`. Short flags and `--key=value` are not manager flags.
fn manager_flag(arg: &str) -> Option<&str> {
    let name = arg.strip_prefix("--")?;
    if name.is_empty() || name.contains('=') {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(args: &[&str]) -> Result<ExtractedArgs> {
        extract_manager_flags(args.iter().map(|s| s.to_string()), &Catalog::builtin())
    }

    #[test]
    fn no_flags_passes_through() {
        let out = extract(&["i", "install", "vim"]).unwrap();
        assert_eq!(out.args, vec!["i", "install", "vim"]);
        assert!(out.forced_manager.is_none());
    }

    #[test]
    fn manager_flag_anywhere() {
        let out = extract(&["i", "--snap", "install", "vim"]).unwrap();
        assert_eq!(out.args, vec!["i", "install", "vim"]);
        assert_eq!(out.forced_manager.as_deref(), Some("snap"));
    }

    #[test]
    fn hyphenated_manager_id() {
        let out = extract(&["i", "install", "htop", "--nix-env"]).unwrap();
        assert_eq!(out.forced_manager.as_deref(), Some("nix-env"));
    }

    #[test]
    fn last_manager_flag_wins() {
        let out = extract(&["i", "--apt", "--snap", "list"]).unwrap();
        assert_eq!(out.forced_manager.as_deref(), Some("snap"));
    }

    #[test]
    fn reserved_flags_stay() {
        let out = extract(&["i", "list", "--quiet", "--debug", "-q"]).unwrap();
        assert_eq!(out.args, vec!["i", "list", "--quiet", "--debug", "-q"]);
        assert!(out.forced_manager.is_none());
    }

    #[test]
    fn unknown_long_flag_is_unknown_manager() {
        let err = extract(&["i", "install", "vim", "--aptitude"]).unwrap_err();
        assert!(matches!(err, InstallerError::UnknownManager { ref id } if id == "aptitude"));
    }

    #[test]
    fn generic_name_is_not_a_manager_flag() {
        assert!(extract(&["i", "list", "--i"]).is_err());
    }

    #[test]
    fn arguments_after_double_dash_are_untouched() {
        let out = extract(&["i", "search", "--", "--apt"]).unwrap();
        assert_eq!(out.args, vec!["i", "search", "--", "--apt"]);
        assert!(out.forced_manager.is_none());
    }

    #[test]
    fn program_name_is_never_a_flag() {
        let out = extract(&["--apt"]).unwrap();
        assert_eq!(out.args, vec!["--apt"]);
    }
}
