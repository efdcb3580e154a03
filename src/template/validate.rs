//! Package name validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{InstallerError, Result};

/// Letters, digits and `_ - @ . +`.
static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_@.+-]+$").expect("PACKAGE_NAME must compile"));

/// Check a package name against the allow-list.
///
/// A leading `-` is rejected as well, since the manager would read it as
/// an option.
///
/// # Errors
///
/// Returns `InvalidPackageName` when the name is rejected.
pub fn validate_package_name(name: &str) -> Result<()> {
    if PACKAGE_NAME.is_match(name) && !name.starts_with('-') {
        Ok(())
    } else {
        Err(InstallerError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        for name in ["vim", "python3.8", "g++", "lib-foo_bar", "node@20", "Microsoft.VSCode"] {
            assert!(validate_package_name(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn rejects_shell_metacharacters() {
        for name in ["vim; rm -rf /", "../etc", "foo bar", "$(id)", "a|b", "a&&b", ""] {
            assert!(validate_package_name(name).is_err(), "{:?}", name);
        }
    }

    #[test]
    fn rejects_option_like_names() {
        let err = validate_package_name("--purge").unwrap_err();
        assert!(matches!(err, InstallerError::InvalidPackageName { .. }));
    }
}
