//! Implementation of the `webptidy cleanup` command.
//!
//! Finishes a WebP-to-JPEG migration for each category folder:
//! - WebP files without a JPEG sibling are converted first
//! - WebP files with a JPEG sibling (pre-existing or just written) are removed
//!
//! # Safety
//!
//! - A WebP is never removed unless its JPEG sibling exists
//! - A failed conversion keeps the WebP and moves on to the next file
//! - Per-file failures are counted; the run never stops early
//!
//! After the run, each category is re-scanned and the remaining JPG/PNG/WebP
//! counts are printed as found.

mod execution;
mod types;


use super::summary::{print_banner, print_heading, print_image_summary};
use crate::cli::DatasetArgs;
use crate::config::{Dataset, JPEG_QUALITY};
use crate::convert::ensure_codecs_available;
use crate::error::Result;

use execution::cleanup_dataset;
use types::CleanupReport;

/// Execute the `webptidy cleanup` command.
pub fn cmd_cleanup(args: DatasetArgs) -> Result<()> {
    let dataset = Dataset::resolve(args.data_path, args.categories)?;
    run_cleanup(&dataset).map(|_| ())
}

/// Run the cleanup over a dataset and print the summaries.
pub fn run_cleanup(dataset: &Dataset) -> Result<CleanupReport> {
    ensure_codecs_available()?;
    print_banner("WebP Cleanup and Converter", dataset);

    let report = cleanup_dataset(dataset, JPEG_QUALITY)?;

    println!();
    print_heading("Cleanup Complete!");
    println!("Total converted: {}", report.total.converted);
    println!("Total removed: {}", report.total.removed);
    if report.total.failed > 0 {
        println!("Total failed: {}", report.total.failed);
    }
    for entry in &report.categories {
        println!(
            "  {}: converted {}, removed {}, failed {}",
            entry.category, entry.counts.converted, entry.counts.removed, entry.counts.failed
        );
    }
    if !report.missing.is_empty() {
        println!("Missing folders: {}", report.missing.join(", "));
    }

    print_image_summary(dataset)?;

    Ok(report)
}
