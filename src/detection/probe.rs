//! Executable availability on the search path.
//!
//! This is the only place that consults `PATH`. Everything else asks a
//! [`Probe`], which keeps resolution testable without touching the host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Answers whether an executable is resolvable, and where.
pub trait Probe {
    /// Resolve `binary` to a path, or `None` when it is not available.
    fn probe(&self, binary: &str) -> Option<PathBuf>;

    /// Whether `binary` is resolvable at all.
    fn is_available(&self, binary: &str) -> bool {
        self.probe(binary).is_some()
    }
}

/// Probe backed by the `which` crate.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    /// Search path override; `None` means the process `PATH`.
    paths: Option<OsString>,
}

impl PathProbe {
    /// Probe the process `PATH`.
    pub fn new() -> Self {
        Self { paths: None }
    }

    /// Probe an explicit list of directories instead of `PATH`.
    pub fn with_paths(paths: &[PathBuf]) -> Self {
        Self {
            paths: std::env::join_paths(paths).ok(),
        }
    }
}

impl Probe for PathProbe {
    fn probe(&self, binary: &str) -> Option<PathBuf> {
        let found = match &self.paths {
            Some(paths) => which::which_in(binary, Some(paths), Path::new(".")),
            None => which::which(binary),
        };

        match found {
            Ok(path) => {
                tracing::debug!("probe: {} -> {}", binary, path.display());
                Some(path)
            }
            Err(_) => {
                tracing::debug!("probe: {} not found", binary);
                None
            }
        }
    }
}

/// Probe with a fixed answer table. Records every query.
///
/// # Example
///
/// ```
/// use i_installer::detection::{Probe, StaticProbe};
///
/// let probe = StaticProbe::new().with("apt", "/usr/bin/apt");
/// assert!(probe.is_available("apt"));
/// assert!(!probe.is_available("dnf"));
/// assert_eq!(probe.queries(), vec!["apt", "dnf"]);
/// ```
#[derive(Debug, Default)]
pub struct StaticProbe {
    found: HashMap<String, PathBuf>,
    queries: RefCell<Vec<String>>,
}

impl StaticProbe {
    /// An empty probe: nothing is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `binary` as available at `path`.
    pub fn with(mut self, binary: &str, path: impl Into<PathBuf>) -> Self {
        self.found.insert(binary.to_string(), path.into());
        self
    }

    /// Every binary name queried so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl Probe for StaticProbe {
    fn probe(&self, binary: &str) -> Option<PathBuf> {
        self.queries.borrow_mut().push(binary.to_string());
        self.found.get(binary).cloned()
    }
}
