// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Permission bits carried over from source to copy (`rwxrwxrwx`).
pub const PERMISSION_MASK: u32 = 0o777;

/// Applies the low 9 permission bits of `src` to `dst`.
///
/// Symbolic links are followed on both sides. A no-op on non-Unix platforms.
///
/// # Errors
///
/// Returns an error if `src` cannot be inspected or `dst` cannot be changed.
#[cfg(unix)]
pub async fn mirror_permissions(src: &Path, dst: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(src)
        .await
        .with_context(|| format!("failed to stat {}", src.display()))?
        .permissions()
        .mode()
        & PERMISSION_MASK;

    fs::set_permissions(dst, std::fs::Permissions::from_mode(mode))
        .await
        .with_context(|| format!("failed to change permissions of {}", dst.display()))
}

/// Applies the low 9 permission bits of `src` to `dst`.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub async fn mirror_permissions(_src: &Path, _dst: &Path) -> Result<()> {
    Ok(())
}

/// Copies a file and then mirrors its permission bits onto the copy.
///
/// # Errors
///
/// Returns an error if the copy or the permission change fails.
pub async fn copy_file_mirrored(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).await.with_context(|| {
        format!("failed to copy {} to {}", src.display(), dst.display())
    })?;
    mirror_permissions(src, dst).await
}

/// Removes a directory tree if it exists.
///
/// Returns whether anything was removed.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub async fn remove_tree(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(path)
                .await
                .with_context(|| format!("failed to delete directory {}", path.display()))?;
            Ok(true)
        }
        Ok(_) => {
            fs::remove_file(path)
                .await
                .with_context(|| format!("failed to delete file {}", path.display()))?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to stat {}", path.display())),
    }
}

/// Removes a single file if it exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub async fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to delete file {}", path.display())),
    }
}
