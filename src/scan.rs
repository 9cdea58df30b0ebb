//! File enumeration over a category-organized dataset.
//!
//! Every tool discovers its inputs through this module. Matching is a
//! case-sensitive glob on the file name (`*.webp`, `*.jpg`, ...). Folders are
//! visited in the order given and entries within a folder in file-name order.
//! Recovery folders created by the `delete` command are never descended
//! into. Enumeration never touches the filesystem beyond reading it.

use crate::config::{Dataset, RECOVERY_DIR_PREFIX};
use crate::error::{Result, WebpError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const WEBP_PATTERNS: &[&str] = &["*.webp"];

/// Order matters: indices are used by [`count_images`].
const COUNT_PATTERNS: &[&str] = &["*.jpg", "*.jpeg", "*.png", "*.webp"];

/// Per-extension image counts for one folder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageCounts {
    /// `*.jpg` and `*.jpeg` files.
    pub jpg: usize,
    pub png: usize,
    pub webp: usize,
}

impl ImageCounts {
    pub fn total(&self) -> usize {
        self.jpg + self.png + self.webp
    }
}

/// Find WebP files for a dataset.
///
/// With categories, each existing `base/<category>` folder is searched and
/// missing folders are logged and skipped. Without categories the base
/// itself is searched. `recursive` selects a full subtree walk instead of
/// direct children only.
pub fn find_webp_files(base: &Path, categories: &[String], recursive: bool) -> Result<Vec<PathBuf>> {
    let matcher = build_globset(WEBP_PATTERNS)?;
    let mut files = Vec::new();

    if categories.is_empty() {
        collect_existing(base, &matcher, recursive, &mut files);
    } else {
        for category in categories {
            collect_existing(&base.join(category), &matcher, recursive, &mut files);
        }
    }

    Ok(files)
}

/// Find WebP files for a resolved [`Dataset`].
pub fn find_dataset_webp_files(dataset: &Dataset, recursive: bool) -> Result<Vec<PathBuf>> {
    find_webp_files(&dataset.base, &dataset.categories, recursive)
}

/// Find WebP files directly inside (or, with `recursive`, anywhere under) one folder.
pub fn find_webp_in_folder(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let matcher = build_globset(WEBP_PATTERNS)?;
    let mut files = Vec::new();
    collect_matching(folder, &matcher, recursive, &mut files);
    Ok(files)
}

/// Count JPG/JPEG, PNG and WebP files directly inside `folder`.
pub fn count_images(folder: &Path) -> Result<ImageCounts> {
    let matcher = build_globset(COUNT_PATTERNS)?;
    let mut counts = ImageCounts::default();

    for entry in walk(folder, false).filter_map(|e| log_walk_error(folder, e)) {
        if !is_file(&entry) {
            continue;
        }
        for index in matcher.matches(entry.file_name()) {
            match index {
                0 | 1 => counts.jpg += 1,
                2 => counts.png += 1,
                _ => counts.webp += 1,
            }
        }
    }

    Ok(counts)
}

fn collect_existing(folder: &Path, matcher: &GlobSet, recursive: bool, out: &mut Vec<PathBuf>) {
    if !folder.is_dir() {
        tracing::warn!("Folder not found: {}", folder.display());
        return;
    }
    collect_matching(folder, matcher, recursive, out);
}

fn collect_matching(folder: &Path, matcher: &GlobSet, recursive: bool, out: &mut Vec<PathBuf>) {
    for entry in walk(folder, recursive).filter_map(|e| log_walk_error(folder, e)) {
        if is_file(&entry) && matcher.is_match(entry.file_name()) {
            out.push(entry.into_path());
        }
    }
}

/// Unreadable entries are logged and skipped.
fn log_walk_error(folder: &Path, entry: walkdir::Result<DirEntry>) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            let path = e.path().unwrap_or(folder).to_path_buf();
            tracing::warn!("{}", WebpError::scan(&path, &e));
            None
        }
    }
}

fn walk(folder: &Path, recursive: bool) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    let mut walker = WalkDir::new(folder).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }
    walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_recovery_dir(e))
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// True for `.deleted_webp_*` directories.
fn is_recovery_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(RECOVERY_DIR_PREFIX))
}

fn build_globset(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            WebpError::UserError(format!("invalid file pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| WebpError::UserError(format!("failed to build file matcher: {}", e)))
}
