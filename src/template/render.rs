//! Placeholder substitution for command templates.
//!
//! A template marks the package position with a standalone `x`. Matching is
//! word-boundary aware, so the `x` in `xbps-remove` or `nix-env` is left
//! alone while the one in `nixpkgs.x` is replaced.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// The package placeholder: an `x` not touching other word characters.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bx\b").expect("PLACEHOLDER must compile"));

/// Substitute the package name and split the result into an argument vector.
///
/// No shell interpretation happens: quotes, globs and pipes are passed
/// through as literal characters. Templates without a placeholder are
/// emitted verbatim and `package` is ignored.
///
/// # Example
///
/// ```
/// use i_installer::template::render;
///
/// assert_eq!(
///     render("nix-env -iA nixpkgs.x", "htop"),
///     vec!["nix-env", "-iA", "nixpkgs.htop"]
/// );
/// assert_eq!(render("apt list --installed", "vim"), vec!["apt", "list", "--installed"]);
/// ```
pub fn render(template: &str, package: &str) -> Vec<String> {
    substitute(template, package)
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Substitute the package name, keeping the template's spacing.
pub fn substitute(template: &str, package: &str) -> String {
    PLACEHOLDER
        .replace_all(template, NoExpand(package))
        .into_owned()
}

/// Number of standalone placeholders in a template.
pub fn placeholder_count(template: &str) -> usize {
    PLACEHOLDER.find_iter(template).count()
}

/// Whether the template takes a package name at all.
pub fn has_placeholder(template: &str) -> bool {
    PLACEHOLDER.is_match(template)
}
