// src/mount/mod.rs
//! Archive mounting: extracts a filesystem image onto the host disk.
//!
//! One-shot, runs before any command. A failure here is fatal to the
//! session, so every error maps to a [`MountError`] for the caller to
//! report and exit on.

pub mod archive;

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::vfs;
use archive::{decompress_gzip, is_gzip, parse_archive, ArchiveEntry};

/// Errors raised while mounting a filesystem image.
#[derive(Error, Debug)]
pub enum MountError {
    #[error("cannot open image '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("corrupt image: {0}")]
    Corrupt(String),

    #[error("unsupported entry type '{type_flag}' for '{path}'")]
    Unsupported { type_flag: String, path: String },

    #[error("cannot extract '{path}': {source}")]
    Extract {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Extract every entry of `image` into `mount_root`, creating the root
/// (and missing parents) if absent. Re-running overwrites existing files.
///
/// Entry paths are normalized through [`vfs::normalize`], so an image
/// cannot place anything outside `mount_root`.
pub fn mount(image: &Path, mount_root: &Path) -> Result<(), MountError> {
    let data = fs::read(image).map_err(|e| MountError::Open {
        path: image.display().to_string(),
        source: e,
    })?;

    let data = if is_gzip(&data) {
        decompress_gzip(&data)?
    } else {
        data
    };

    let entries = parse_archive(&data)?;

    fs::create_dir_all(mount_root).map_err(|e| MountError::Extract {
        path: mount_root.display().to_string(),
        source: e,
    })?;

    for entry in &entries {
        extract_entry(entry, mount_root)?;
    }

    Ok(())
}

fn extract_entry(entry: &ArchiveEntry, mount_root: &Path) -> Result<(), MountError> {
    let virtual_path = vfs::normalize(&entry.path);
    if virtual_path == "/" {
        return Ok(());
    }
    let target = vfs::resolve(mount_root, &entry.path);

    let fail = |e: io::Error| MountError::Extract {
        path: entry.path.clone(),
        source: e,
    };

    if entry.is_directory {
        fs::create_dir_all(&target).map_err(fail)?;
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    if entry.is_symlink {
        #[cfg(unix)]
        {
            if target.symlink_metadata().is_ok() {
                fs::remove_file(&target).map_err(fail)?;
            }
            let link_target = contain_link_target(mount_root, &entry.path, &entry.link_target);
            std::os::unix::fs::symlink(&link_target, &target).map_err(fail)?;
            return Ok(());
        }
        #[cfg(not(unix))]
        {
            return Err(MountError::Unsupported {
                type_flag: "symlink".to_string(),
                path: entry.path.clone(),
            });
        }
    }

    fs::write(&target, &entry.content).map_err(fail)?;

    #[cfg(unix)]
    if entry.mode != 0 {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&target, fs::Permissions::from_mode(entry.mode)).map_err(fail)?;
    }

    Ok(())
}

#[cfg(unix)]
fn virtual_dirname(path: &str) -> String {
    let normalized = vfs::normalize(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => normalized[..pos].to_string(),
    }
}

/// Rewrite a symlink target so the link stays inside the mount root.
///
/// The target resolves in virtual space (relative targets against the
/// link's own directory, absolute targets against the virtual root) and
/// is then anchored under `mount_root` like any other entry path, so an
/// image cannot plant a link that reaches outside the mounted subtree.
#[cfg(unix)]
fn contain_link_target(
    mount_root: &Path,
    link_path: &str,
    target: &str,
) -> std::path::PathBuf {
    let virtual_target = if target.starts_with('/') {
        vfs::normalize(target)
    } else {
        let dir = virtual_dirname(link_path);
        if dir == "/" {
            vfs::normalize(target)
        } else {
            vfs::normalize(&format!("{}/{}", dir, target))
        }
    };
    vfs::resolve(mount_root, &virtual_target)
}
