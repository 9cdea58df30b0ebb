//! Deletion plan building logic.

use super::types::{DeleteMode, DeletionPlan};
use crate::config::{Dataset, RECOVERY_DIR_PREFIX, RECOVERY_TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::scan::find_dataset_webp_files;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Discover WebP files for the given mode.
///
/// The recovery folder is left unset until the run is confirmed; see
/// [`stamp_recovery_root`].
pub fn build_deletion_plan(
    dataset: &Dataset,
    recursive: bool,
    mode: DeleteMode,
) -> Result<DeletionPlan> {
    let files = find_dataset_webp_files(dataset, recursive)?;

    Ok(DeletionPlan {
        base: dataset.base.clone(),
        files,
        mode,
        recovery_root: None,
    })
}

/// Name the recovery folder of a move plan after `now`.
pub fn stamp_recovery_root(plan: &mut DeletionPlan, now: DateTime<Local>) {
    plan.recovery_root = match plan.mode {
        DeleteMode::Move => Some(recovery_root(&plan.base, now)),
        DeleteMode::DryRun | DeleteMode::Permanent => None,
    };
}

/// `base/.deleted_webp_<YYYYMMDD-HHMMSS>`.
pub fn recovery_root(base: &Path, now: DateTime<Local>) -> PathBuf {
    base.join(format!(
        "{}{}",
        RECOVERY_DIR_PREFIX,
        now.format(RECOVERY_TIMESTAMP_FORMAT)
    ))
}

/// Path of `file` relative to `base`.
///
/// Files outside `base` (an absolute category path, for instance) fall back
/// to their bare file name, so they land flat in the recovery root. Two such
/// files with the same name collide there and the later move wins.
pub fn relative_destination(file: &Path, base: &Path) -> PathBuf {
    match file.strip_prefix(base) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| file.to_path_buf()),
    }
}
