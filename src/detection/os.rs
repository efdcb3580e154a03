//! Operating system and distribution identity.

use std::fs;
use std::path::Path;

/// Files consulted for the distribution id, in order.
const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Operating system family, as far as manager detection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl OsFamily {
    /// Parse an OS id such as `std::env::consts::OS`.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "windows" => OsFamily::Windows,
            "macos" | "darwin" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            _ => OsFamily::Other,
        }
    }
}

/// The `ID=` and `ID_LIKE=` keys of an os-release file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    pub id: Option<String>,
    pub id_like: Vec<String>,
}

impl OsRelease {
    /// Read the host's os-release file, if there is one.
    pub fn read() -> Option<Self> {
        OS_RELEASE_PATHS
            .iter()
            .find_map(|path| Self::read_from(Path::new(path)))
    }

    /// Read a specific os-release file.
    pub fn read_from(path: &Path) -> Option<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(e) => {
                tracing::debug!("could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Parse os-release content.
    pub fn parse(content: &str) -> Self {
        let mut release = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if let Some(val) = line.strip_prefix("ID=") {
                let id = unquote(val).to_lowercase();
                if !id.is_empty() {
                    release.id = Some(id);
                }
            } else if let Some(val) = line.strip_prefix("ID_LIKE=") {
                release.id_like = unquote(val)
                    .split_whitespace()
                    .map(|s| s.to_lowercase())
                    .collect();
            }
        }

        release
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"').trim_matches('\'')
}
