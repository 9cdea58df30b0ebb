//! Implementation of the `webptidy convert` command.
//!
//! Converts every WebP file in each category folder to a JPEG sibling at
//! the configured quality. Existing JPEG siblings are never overwritten and
//! WebP sources are never deleted.

use super::summary::{print_banner, print_heading, print_image_summary};
use crate::cli::DatasetArgs;
use crate::config::{Dataset, JPEG_QUALITY};
use crate::convert::{ConversionReport, convert_dataset, ensure_codecs_available};
use crate::error::Result;

/// Execute the `webptidy convert` command.
pub fn cmd_convert(args: DatasetArgs) -> Result<()> {
    let dataset = Dataset::resolve(args.data_path, args.categories)?;
    run_convert(&dataset).map(|_| ())
}

/// Convert a dataset and print totals plus the remaining-image table.
pub fn run_convert(dataset: &Dataset) -> Result<ConversionReport> {
    ensure_codecs_available()?;
    print_banner("WebP to JPEG Converter", dataset);

    let report = convert_dataset(dataset, JPEG_QUALITY)?;

    println!();
    print_heading("Conversion Complete!");
    println!("Total converted: {}", report.total.converted);
    println!("Total skipped (JPEG exists): {}", report.total.skipped);
    println!("Total failed: {}", report.total.failed);
    for entry in &report.categories {
        println!(
            "  {}: converted {}, skipped {}, failed {}",
            entry.category, entry.counts.converted, entry.counts.skipped, entry.counts.failed
        );
    }
    if !report.missing.is_empty() {
        println!("Missing folders: {}", report.missing.join(", "));
    }

    print_image_summary(dataset)?;

    Ok(report)
}
