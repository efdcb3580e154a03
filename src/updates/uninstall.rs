//! Self-uninstall: remove the installed `i` binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::InstallLocation;
use crate::detection::Probe;
use crate::error::{InstallerError, Result};
use crate::shell::{ExecutionRequest, Executor};
use crate::ui::UserInterface;

/// Directories checked when `INSTALL_DIR` is unset and the search path has no hit.
pub const FALLBACK_DIRS: [&str; 2] = ["/usr/local/bin", "/usr/bin"];

/// What self-uninstall did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed(PathBuf),
    /// The target was already gone.
    NothingToRemove(PathBuf),
    /// The user declined the confirmation.
    Aborted,
}

/// Locate the installed binary.
///
/// `INSTALL_DIR` wins; otherwise the search-path hit for the install name;
/// otherwise the first fallback directory holding a file with that name.
pub fn find_target(
    location: &InstallLocation,
    probe: &dyn Probe,
    fallback_dirs: &[PathBuf],
) -> Option<PathBuf> {
    if location.dir_overridden {
        return Some(location.target());
    }

    if let Some(found) = probe.probe(&location.name) {
        return Some(found);
    }

    fallback_dirs
        .iter()
        .map(|dir| dir.join(&location.name))
        .find(|path| path.is_file())
}

/// Remove the installed binary after asking for confirmation.
pub fn self_uninstall(
    location: &InstallLocation,
    probe: &dyn Probe,
    ui: &mut dyn UserInterface,
    executor: &mut dyn Executor,
) -> Result<UninstallOutcome> {
    let fallbacks: Vec<PathBuf> = FALLBACK_DIRS.iter().map(PathBuf::from).collect();
    let target = find_target(location, probe, &fallbacks).ok_or_else(|| {
        InstallerError::SelfUninstall {
            path: PathBuf::from(&location.name),
            message: "not found in PATH and no INSTALL_DIR given".to_string(),
        }
    })?;

    if fs::symlink_metadata(&target).is_err() {
        ui.message(&format!(
            "Nothing to remove: {} does not exist.",
            target.display()
        ));
        return Ok(UninstallOutcome::NothingToRemove(target));
    }

    ui.message(&format!("This will remove:\n  {}", target.display()));
    if !ui.confirm("Proceed?", false)? {
        ui.message("Aborted.");
        return Ok(UninstallOutcome::Aborted);
    }

    remove(&target, ui, executor)?;
    ui.success(&format!(
        "uninstalled {} from {}",
        location.name,
        target.display()
    ));
    Ok(UninstallOutcome::Removed(target))
}

fn remove(target: &Path, ui: &mut dyn UserInterface, executor: &mut dyn Executor) -> Result<()> {
    match fs::remove_file(target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            ui.warning("permission denied, retrying with elevated privileges");
            let request = ExecutionRequest::new(
                vec!["rm".into(), "-f".into(), target.display().to_string()],
                true,
            )
            .quiet(ui.output_mode().is_quiet());
            executor
                .run_checked(&request)
                .map_err(|e| InstallerError::SelfUninstall {
                    path: target.to_path_buf(),
                    message: e.to_string(),
                })
        }
        Err(e) => Err(InstallerError::SelfUninstall {
            path: target.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::StaticProbe;
    use crate::shell::RecordingExecutor;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn location_in(dir: &Path) -> InstallLocation {
        InstallLocation {
            dir: dir.to_path_buf(),
            name: "i".to_string(),
            dir_overridden: true,
        }
    }

    #[test]
    fn install_dir_wins() {
        let probe = StaticProbe::new().with("i", "/somewhere/else/i");
        let loc = location_in(Path::new("/opt/bin"));
        assert_eq!(
            find_target(&loc, &probe, &[]),
            Some(PathBuf::from("/opt/bin/i"))
        );
        assert!(probe.queries().is_empty());
    }

    #[test]
    fn search_path_then_fallbacks() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("i"), "").unwrap();
        let loc = InstallLocation::default();

        let probe = StaticProbe::new().with("i", "/home/me/bin/i");
        assert_eq!(
            find_target(&loc, &probe, &[temp.path().to_path_buf()]),
            Some(PathBuf::from("/home/me/bin/i"))
        );

        let empty = StaticProbe::new();
        assert_eq!(
            find_target(&loc, &empty, &[PathBuf::from("/nonexistent"), temp.path().to_path_buf()]),
            Some(temp.path().join("i"))
        );
        assert_eq!(find_target(&loc, &empty, &[]), None);
    }

    #[test]
    fn removes_after_confirmation() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("i");
        fs::write(&target, "binary").unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm(true);
        let mut exec = RecordingExecutor::new();
        let outcome = self_uninstall(
            &location_in(temp.path()),
            &StaticProbe::new(),
            &mut ui,
            &mut exec,
        )
        .unwrap();

        assert_eq!(outcome, UninstallOutcome::Removed(target.clone()));
        assert!(!target.exists());
        assert!(ui.has_success("uninstalled i"));
    }

    #[test]
    fn declining_aborts_and_keeps_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("i");
        fs::write(&target, "binary").unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm(false);
        let outcome = self_uninstall(
            &location_in(temp.path()),
            &StaticProbe::new(),
            &mut ui,
            &mut RecordingExecutor::new(),
        )
        .unwrap();

        assert_eq!(outcome, UninstallOutcome::Aborted);
        assert!(target.exists());
        assert!(ui.has_message("Aborted."));
    }

    #[test]
    fn missing_target_file_is_nothing_to_remove() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let outcome = self_uninstall(
            &location_in(temp.path()),
            &StaticProbe::new(),
            &mut ui,
            &mut RecordingExecutor::new(),
        )
        .unwrap();

        assert!(matches!(outcome, UninstallOutcome::NothingToRemove(_)));
        assert!(ui.questions().is_empty());
    }
}
