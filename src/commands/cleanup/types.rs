//! Data types for the cleanup command.

/// Converted/removed/failed tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupCounts {
    /// WebP files converted to a new JPEG sibling.
    pub converted: usize,
    /// WebP files removed after their JPEG sibling was confirmed.
    pub removed: usize,
    /// Conversion or removal failures; the WebP is left in place.
    pub failed: usize,
}

impl CleanupCounts {
    pub fn add(&mut self, other: &CleanupCounts) {
        self.converted += other.converted;
        self.removed += other.removed;
        self.failed += other.failed;
    }
}

/// Cleanup results for one category folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCleanup {
    pub category: String,
    pub counts: CleanupCounts,
}

/// Summary of a cleanup run.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Categories whose folder existed, in processing order.
    pub categories: Vec<CategoryCleanup>,
    /// Categories whose folder was missing.
    pub missing: Vec<String>,
    pub total: CleanupCounts,
}
