//! File move helpers.
//!
//! Soft deletes move WebP files into a recovery folder under the dataset
//! base. That is normally a plain `rename(2)`, but a category folder can be
//! a mount point or a symlink onto another volume, which surfaces `EXDEV`
//! ("Invalid cross-device link"). For those cases we fall back to copy +
//! delete.

use std::fs;
use std::io;
use std::path::Path;

/// Move a single file from `source` to `destination`.
///
/// - Creates the destination's parent directories.
/// - Tries `rename()` first.
/// - Falls back to copy + delete of `source` on EXDEV.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> io::Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device_rename(&e) => move_file_cross_device(source, destination, e),
        Err(e) => Err(e),
    }
}

fn move_file_cross_device(
    source: &Path,
    destination: &Path,
    original_error: io::Error,
) -> io::Result<()> {
    tracing::debug!(
        source = %source.display(),
        error = %original_error,
        "rename crossed devices, copying instead"
    );

    if let Err(e) = fs::copy(source, destination) {
        let _ = fs::remove_file(destination);
        return Err(io::Error::new(
            e.kind(),
            format!("cross-device copy failed: {} (rename error: {})", e, original_error),
        ));
    }

    fs::remove_file(source).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("copied across devices but failed to delete source: {}", e),
        )
    })
}

fn is_cross_device_rename(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices || err.raw_os_error() == Some(18)
}
