/// Rename a wiped file to its fingerprint
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WipeError;

/// Rename `path` to `<parent>/<fingerprint>` (no extension)
///
/// The rename stays inside the original parent directory, so directory
/// structure is never altered. A pre-existing target is rejected rather
/// than replaced: fs::rename on Unix silently clobbers, and two files in
/// one directory can legitimately collide on fingerprint only through a
/// prior partial run.
///
/// # Returns
/// The new path on success. On failure the file remains at `path` with
/// its already-destroyed content.
pub fn rename_to_fingerprint(path: &Path, fingerprint: &str) -> Result<PathBuf, WipeError> {
    // A bare filename has no parent component; treat that as the
    // current directory
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let target = parent.join(fingerprint);

    if target.exists() {
        return Err(WipeError::RenameCollision { target });
    }

    fs::rename(path, &target).map_err(|source| WipeError::Rename {
        from: path.to_path_buf(),
        to: target.clone(),
        source,
    })?;

    Ok(target)
}
