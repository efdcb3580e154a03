//! Latest-release lookup on GitHub.

use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::io::Write;
use std::time::Duration;

use crate::error::{InstallerError, Result};

/// Current version of i.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GitHub `owner/name` the releases are published under.
pub const REPOSITORY: &str = "abanoubha/i";

/// GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const TIMEOUT: Duration = Duration::from_secs(30);

/// Release asset name for an OS/arch pair (`std::env::consts` spelling).
///
/// # Example
///
/// ```
/// use i_installer::updates::asset_name_for;
///
/// assert_eq!(asset_name_for("linux", "x86_64"), Some("i-linux-x64"));
/// assert_eq!(asset_name_for("windows", "x86_64"), None);
/// ```
pub fn asset_name_for(os: &str, arch: &str) -> Option<&'static str> {
    match (os, arch) {
        ("linux", "x86_64") => Some("i-linux-x64"),
        ("linux", "aarch64") => Some("i-linux-arm64"),
        ("macos", "x86_64") => Some("i-macos-intel-x64"),
        ("macos", "aarch64") => Some("i-macos-apple-silicon-arm64"),
        _ => None,
    }
}

/// Release asset name for the running host.
pub fn current_asset_name() -> Result<&'static str> {
    let (os, arch) = (std::env::consts::OS, std::env::consts::ARCH);
    asset_name_for(os, arch).ok_or_else(|| InstallerError::SelfUpdate {
        message: format!("unsupported platform: {}/{}", os, arch),
    })
}

/// The part of a GitHub release we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

impl Release {
    /// Parse a `releases/latest` response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let release: Self =
            serde_json::from_str(body).context("Failed to parse GitHub API response")?;
        Ok(release)
    }

    /// The first asset whose name contains `target`.
    pub fn find_asset(&self, target: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name.contains(target))
    }
}

/// Blocking GitHub releases client.
pub struct ReleaseClient {
    api_base: String,
    client: reqwest::blocking::Client,
}

impl ReleaseClient {
    /// Client for an API root, normally [`GITHUB_API_BASE`].
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("i-installer/{}", VERSION))
            .timeout(TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn latest_release_url(&self) -> String {
        format!("{}/repos/{}/releases/latest", self.api_base, REPOSITORY)
    }

    /// Fetch the latest release metadata.
    pub fn latest_release(&self) -> Result<Release> {
        let url = self.latest_release_url();
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("API request failed with status: {}", response.status()).into());
        }

        let body = response.text().context("Failed to read GitHub API response")?;
        Release::from_json(&body)
    }

    /// Download URL of `asset` in the latest release.
    pub fn download_url(&self, asset: &str) -> Result<String> {
        let release = self.latest_release()?;
        release
            .find_asset(asset)
            .map(|a| a.browser_download_url.clone())
            .ok_or_else(|| InstallerError::SelfUpdate {
                message: format!("asset '{}' not found in latest release", asset),
            })
    }

    /// Stream `url` into `dest`.
    pub fn download_to(&self, url: &str, dest: &mut impl Write) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to download {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("bad status: {}", response.status()).into());
        }

        let written = response
            .copy_to(dest)
            .with_context(|| format!("Failed to read response from {}", url))?;
        Ok(written)
    }
}
