//! Data types for the delete command.

use std::path::PathBuf;

/// What happens to discovered files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Report only; nothing is touched.
    DryRun,
    /// Move files into a timestamped recovery folder under the base.
    Move,
    /// Unlink files.
    Permanent,
}

impl DeleteMode {
    /// `--permanent` only takes effect together with `--delete`.
    pub fn from_flags(delete: bool, permanent: bool) -> Self {
        match (delete, permanent) {
            (false, _) => DeleteMode::DryRun,
            (true, false) => DeleteMode::Move,
            (true, true) => DeleteMode::Permanent,
        }
    }
}

/// Discovered files and what to do with them.
#[derive(Debug, Clone)]
pub struct DeletionPlan {
    /// Dataset base; recovery paths mirror file paths relative to it.
    pub base: PathBuf,
    /// Discovered WebP files, in discovery order.
    pub files: Vec<PathBuf>,
    pub mode: DeleteMode,
    /// `base/.deleted_webp_<timestamp>`, set only in move mode.
    pub recovery_root: Option<PathBuf>,
}

/// Summary of deletion results.
#[derive(Debug, Default)]
pub struct DeletionResult {
    /// Files unlinked (permanent mode).
    pub deleted: usize,
    /// Files moved to the recovery folder (move mode).
    pub moved: usize,
    /// Files that could not be processed.
    pub failed: usize,
    /// Failed paths with reasons.
    pub failures: Vec<(PathBuf, String)>,
}

/// How a `delete` run ended.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Discovery found no files.
    NothingFound,
    /// Files were listed but `--delete` was not given.
    DryRun { found: usize },
    /// The user declined the confirmation prompt.
    Aborted,
    /// Files were processed.
    Executed(DeletionResult),
}
