//! Self-update: download the latest release and install it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::release::{current_asset_name, ReleaseClient};
use crate::config::InstallLocation;
use crate::error::{InstallerError, Result};
use crate::shell::{ExecutionRequest, Executor};
use crate::ui::UserInterface;

/// Download the latest release for this host and install it at `location`.
///
/// Returns the installed path.
pub fn self_update(
    client: &ReleaseClient,
    location: &InstallLocation,
    ui: &mut dyn UserInterface,
    executor: &mut dyn Executor,
) -> Result<PathBuf> {
    let asset = current_asset_name()?;
    ui.info(&format!(
        "detected system: {}/{}, looking for asset: {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        asset
    ));

    let url = client.download_url(asset)?;
    ui.info(&format!("downloading: {}", url));

    let mut download = tempfile::Builder::new().prefix("i-installer-").tempfile()?;
    client.download_to(&url, download.as_file_mut())?;

    let target = location.target();
    ui.info(&format!("installing to {}", target.display()));
    install_binary(download.path(), &target, ui, executor)?;

    ui.success(&format!(
        "successfully installed '{}' to '{}'",
        location.name,
        target.display()
    ));
    Ok(target)
}

/// Install `src` as `dest` with mode 0755.
///
/// The new file is staged next to `dest` and renamed over it, so a running
/// `dest` is replaced rather than written to. Falls back to privileged
/// `mkdir -p`, `cp`, `chmod 755` and `mv -f` when the directory is not
/// writable.
pub fn install_binary(
    src: &Path,
    dest: &Path,
    ui: &mut dyn UserInterface,
    executor: &mut dyn Executor,
) -> Result<()> {
    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let quiet = ui.output_mode().is_quiet();

    if let Err(e) = fs::create_dir_all(dir) {
        if e.kind() != io::ErrorKind::PermissionDenied {
            return Err(e.into());
        }
        privileged(executor, &["mkdir", "-p"], &[dir], quiet)?;
    }

    match stage_and_replace(src, dir, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            ui.warning("permission denied, retrying with elevated privileges");
            privileged_replace(src, dest, executor, quiet)
        }
        Err(e) => Err(e.into()),
    }
}

fn stage_and_replace(src: &Path, dir: &Path, dest: &Path) -> io::Result<()> {
    let mut source = fs::File::open(src)?;
    let mut staged = tempfile::Builder::new()
        .prefix(".i-installer-")
        .tempfile_in(dir)?;
    io::copy(&mut source, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    set_executable(staged.path())?;
    staged.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

fn privileged_replace(
    src: &Path,
    dest: &Path,
    executor: &mut dyn Executor,
    quiet: bool,
) -> Result<()> {
    let staged = staging_path(dest);
    privileged(executor, &["cp"], &[src, staged.as_path()], quiet)?;
    privileged(executor, &["chmod", "755"], &[staged.as_path()], quiet)?;
    privileged(executor, &["mv", "-f"], &[staged.as_path(), dest], quiet)
}

/// `<dir>/.<name>.new`, the sibling used by the privileged path.
fn staging_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "i".to_string());
    dest.with_file_name(format!(".{}.new", name))
}

fn privileged(
    executor: &mut dyn Executor,
    command: &[&str],
    paths: &[&Path],
    quiet: bool,
) -> Result<()> {
    let argv = command
        .iter()
        .map(|s| s.to_string())
        .chain(paths.iter().map(|p| p.display().to_string()))
        .collect();
    let request = ExecutionRequest::new(argv, true).quiet(quiet);
    executor
        .run_checked(&request)
        .map_err(|e| InstallerError::SelfUpdate {
            message: e.to_string(),
        })
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
