//! Atomic file writes.
//!
//! The converter encodes a JPEG fully in memory and then publishes it with
//! [`atomic_write`]:
//! 1. Write the bytes to a hidden temporary file in the same directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! Readers therefore see either no sibling or a complete one. Source and
//! destination share a directory, so the rename never crosses filesystems.
//! On crash a temporary file named `.{filename}.{pid}.tmp` may remain.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path)?;

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Temporary sibling path: `.{filename}.{pid}.tmp`.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"))?;

    Ok(parent.join(format!(".{}.{}.tmp", filename, std::process::id())))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
