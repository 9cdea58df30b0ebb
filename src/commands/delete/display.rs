//! Display and formatting utilities for delete command output.

use super::types::{DeleteMode, DeletionPlan, DeletionResult};
use crate::commands::summary::print_banner;
use crate::config::Dataset;
use std::path::PathBuf;

/// Print the startup banner with the delete-specific settings.
pub fn print_delete_banner(dataset: &Dataset, recursive: bool, permanent: bool) {
    print_banner("WebP Deleter", dataset);
    println!("Recursive: {}", recursive);
    println!("Dry run (no files moved) by default. Use --delete to actually move files.");
    if permanent {
        println!("WARNING: --permanent will permanently delete files (irreversible)");
    }
    println!();
}

/// Print the discovered files, truncated after `limit` entries.
pub fn print_discovered(files: &[PathBuf], limit: usize) {
    for line in discovered_lines(files, limit) {
        println!("{}", line);
    }
}

/// Lines of the discovery report: a count, up to `limit` paths, and a
/// truncation notice when more were found.
pub fn discovered_lines(files: &[PathBuf], limit: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(files.len().min(limit) + 2);
    lines.push(format!("Found {} .webp files:", files.len()));
    lines.extend(files.iter().take(limit).map(|f| format!("   {}", f.display())));
    if files.len() > limit {
        lines.push(format!("  ... (only first {} shown)", limit));
    }
    lines
}

/// Confirmation question for the planned action.
pub fn confirmation_prompt(plan: &DeletionPlan) -> String {
    let action = match plan.mode {
        DeleteMode::Permanent => "permanently delete",
        DeleteMode::Move | DeleteMode::DryRun => "move to recovery folder",
    };
    format!("Proceed with action ({} {} file(s))? [y/N]", action, plan.files.len())
}

/// Print the execution summary.
pub fn print_deletion_summary(plan: &DeletionPlan, result: &DeletionResult) {
    println!();
    println!("Summary:");
    match plan.mode {
        DeleteMode::Permanent => println!("  Permanently deleted: {}", result.deleted),
        DeleteMode::Move | DeleteMode::DryRun => {
            println!("  Moved to recovery folder: {}", result.moved);
            if let Some(root) = &plan.recovery_root {
                println!("  Recovery folder: {}", root.display());
            }
        }
    }
    println!("  Failed: {}", result.failed);
    for (path, reason) in &result.failures {
        println!("    - {}: {}", path.display(), reason);
    }

    if plan.mode == DeleteMode::Move && result.moved > 0 {
        println!();
        println!("You can restore files from the recovery folder if needed.");
    }
}
