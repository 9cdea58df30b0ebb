//! Deletion execution logic.

use super::planning::relative_destination;
use super::types::{DeleteMode, DeletionPlan, DeletionResult};
use crate::error::{Result, WebpError};
use crate::fs::move_file;
use std::fs;
use std::path::Path;

/// Move or unlink every planned file.
///
/// Each file is handled independently: a failure is logged and counted and
/// the remaining files are still processed. A dry-run plan does nothing.
pub fn execute_deletion(plan: &DeletionPlan) -> DeletionResult {
    let mut result = DeletionResult::default();

    for file in &plan.files {
        let outcome = match (plan.mode, &plan.recovery_root) {
            (DeleteMode::DryRun, _) => return result,
            (DeleteMode::Permanent, _) => delete_permanently(file),
            (DeleteMode::Move, Some(root)) => move_to_recovery(file, &plan.base, root),
            (DeleteMode::Move, None) => Err(WebpError::move_failed(
                file,
                "no recovery folder in the deletion plan",
            )),
        };

        match outcome {
            Ok(()) => match plan.mode {
                DeleteMode::Permanent => result.deleted += 1,
                _ => result.moved += 1,
            },
            Err(e) => {
                println!("  Failed to process {}: {}", file.display(), e);
                result.failed += 1;
                result.failures.push((file.clone(), e.to_string()));
            }
        }
    }

    result
}

fn delete_permanently(file: &Path) -> Result<()> {
    fs::remove_file(file).map_err(|e| WebpError::delete(file, e))
}

fn move_to_recovery(file: &Path, base: &Path, recovery_root: &Path) -> Result<()> {
    let destination = recovery_root.join(relative_destination(file, base));
    tracing::debug!(
        source = %file.display(),
        destination = %destination.display(),
        "moving to recovery folder"
    );
    move_file(file, &destination).map_err(|e| WebpError::move_failed(file, e))
}
