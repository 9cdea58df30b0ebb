//! Implementation of the `webptidy delete` command.
//!
//! Removes WebP files from a dataset in one linear pass:
//! discover -> report -> dry-run gate -> confirm gate -> execute -> summary.
//!
//! # Safety
//!
//! - Default behavior is dry-run (lists what would be affected)
//! - `--delete` moves files to `<data_path>/.deleted_webp_<timestamp>/`,
//!   mirroring their path relative to the data folder
//! - `--delete --permanent` unlinks files instead
//! - Asks for confirmation unless `--yes` is given
//!
//! Unlike `cleanup`, this command does not check for JPEG siblings: once
//! confirmed, every discovered WebP file is moved or deleted.

mod display;
mod execution;
mod planning;
mod prompt;
mod types;


use crate::cli::DeleteArgs;
use crate::config::{Dataset, SAMPLE_LIMIT};
use crate::error::Result;
use chrono::Local;

use display::{confirmation_prompt, print_delete_banner, print_deletion_summary, print_discovered};
use execution::execute_deletion;
use planning::{build_deletion_plan, stamp_recovery_root};
use prompt::confirm_on_terminal;
use types::{DeleteMode, DeleteOutcome};

/// Execute the `webptidy delete` command.
///
/// # Behavior
///
/// - No files found: reports and exits
/// - Without `--delete`: dry-run, lists files and exits
/// - Without `--yes`: prompts; anything but `y`/`yes` aborts
/// - Otherwise: moves (or with `--permanent`, unlinks) every file
pub fn cmd_delete(args: DeleteArgs) -> Result<()> {
    let dataset = Dataset::resolve(args.dataset.data_path, args.dataset.categories)?;
    let options = DeleteOptions {
        recursive: args.recursive,
        mode: DeleteMode::from_flags(args.delete, args.permanent),
        permanent_requested: args.permanent,
        assume_yes: args.yes,
    };

    match run_delete(&dataset, &options, confirm_on_terminal)? {
        DeleteOutcome::NothingFound => tracing::debug!("delete finished: nothing found"),
        DeleteOutcome::DryRun { found } => tracing::debug!(found, "delete finished: dry-run"),
        DeleteOutcome::Aborted => tracing::debug!("delete finished: aborted by user"),
        DeleteOutcome::Executed(result) => tracing::debug!(
            deleted = result.deleted,
            moved = result.moved,
            failed = result.failed,
            "delete finished"
        ),
    }

    Ok(())
}

/// Resolved flags for a delete run.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOptions {
    pub recursive: bool,
    pub mode: DeleteMode,
    /// `--permanent` was passed, even if `--delete` was not.
    pub permanent_requested: bool,
    pub assume_yes: bool,
}

/// Run the delete state machine with the given confirmation source.
pub fn run_delete<F>(dataset: &Dataset, options: &DeleteOptions, confirm: F) -> Result<DeleteOutcome>
where
    F: FnOnce(&str) -> Result<bool>,
{
    print_delete_banner(dataset, options.recursive, options.permanent_requested);

    let mut plan = build_deletion_plan(dataset, options.recursive, options.mode)?;

    if plan.files.is_empty() {
        println!("No .webp files found.");
        return Ok(DeleteOutcome::NothingFound);
    }

    print_discovered(&plan.files, SAMPLE_LIMIT);

    if plan.mode == DeleteMode::DryRun {
        println!();
        println!("Dry-run mode: no files will be moved or deleted.");
        println!("Run with --delete to move files to a recovery folder.");
        return Ok(DeleteOutcome::DryRun {
            found: plan.files.len(),
        });
    }

    if !options.assume_yes && !confirm(confirmation_prompt(&plan).as_str())? {
        println!("Aborted by user.");
        return Ok(DeleteOutcome::Aborted);
    }

    stamp_recovery_root(&mut plan, Local::now());

    let result = execute_deletion(&plan);
    print_deletion_summary(&plan, &result);

    Ok(DeleteOutcome::Executed(result))
}
