//! Cleanup execution logic.

use super::types::{CategoryCleanup, CleanupCounts, CleanupReport};
use crate::config::Dataset;
use crate::convert::{ConvertOutcome, convert_one, display_name};
use crate::error::{Result, WebpError};
use crate::scan::find_webp_in_folder;
use std::fs;
use std::path::Path;

/// Convert and remove WebP files in every existing category folder, or in
/// the base when the dataset has no categories.
pub fn cleanup_dataset(dataset: &Dataset, quality: u8) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();

    for (category, folder) in dataset.folders() {
        if !folder.is_dir() {
            println!("Folder not found: {}", folder.display());
            report.missing.push(category);
            continue;
        }

        println!();
        println!("Processing {} folder...", category);

        let counts = cleanup_folder(&folder, quality)?;
        println!(
            "  {}: Converted {}, Removed {} WebP files",
            category, counts.converted, counts.removed
        );
        if counts.failed > 0 {
            println!("  {}: {} file(s) failed and were kept", category, counts.failed);
        }

        report.total.add(&counts);
        report.categories.push(CategoryCleanup { category, counts });
    }

    Ok(report)
}

/// Clean up the WebP files directly inside one folder.
///
/// A WebP is removed only once its JPEG sibling exists, either because it
/// was already there or because it was just converted. A failed conversion
/// keeps the WebP.
pub fn cleanup_folder(folder: &Path, quality: u8) -> Result<CleanupCounts> {
    let mut counts = CleanupCounts::default();

    for webp in find_webp_in_folder(folder, false)? {
        let name = display_name(&webp);

        match convert_one(&webp, quality) {
            ConvertOutcome::Converted(jpeg) => {
                println!("  Converted: {} -> {}", name, display_name(&jpeg));
                counts.converted += 1;
            }
            ConvertOutcome::Skipped(jpeg) => {
                tracing::debug!("{} already has {}", name, display_name(&jpeg));
            }
            ConvertOutcome::Failed(e) => {
                println!("  Failed to convert {}: {}", name, e);
                counts.failed += 1;
                continue;
            }
        }

        match remove_webp(&webp) {
            Ok(()) => {
                println!("  Removed: {}", name);
                counts.removed += 1;
            }
            Err(e) => {
                println!("  Failed to remove {}: {}", name, e);
                counts.failed += 1;
            }
        }
    }

    Ok(counts)
}

fn remove_webp(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| WebpError::delete(path, e))
}
