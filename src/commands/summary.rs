//! Output shared by the `convert`, `cleanup`, and `delete` commands.

use crate::config::Dataset;
use crate::error::Result;
use crate::scan::{ImageCounts, count_images};

const RULE_WIDTH: usize = 50;

/// Print a titled header block.
pub fn print_heading(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print the startup banner: title, data path, and categories.
pub fn print_banner(title: &str, dataset: &Dataset) {
    print_heading(title);
    println!("Data path: {}", dataset.base.display());
    println!("Categories: {}", dataset.describe_categories());
}

/// Re-scan each existing dataset folder and print its image counts.
pub fn print_image_summary(dataset: &Dataset) -> Result<()> {
    println!();
    print_heading("Image Count Summary:");

    for (category, folder) in dataset.folders() {
        if !folder.is_dir() {
            continue;
        }
        let counts = count_images(&folder)?;
        println!("{}", format_counts_line(&category, &counts));
    }

    Ok(())
}

/// One row of the image count table.
pub fn format_counts_line(category: &str, counts: &ImageCounts) -> String {
    format!(
        "{:12} - Total: {:3} (JPG: {:3}, PNG: {:3}, WebP: {:3})",
        category,
        counts.total(),
        counts.jpg,
        counts.png,
        counts.webp
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_counts_line() {
        let counts = ImageCounts {
            jpg: 12,
            png: 3,
            webp: 0,
        };

        assert_eq!(
            format_counts_line("Shoes", &counts),
            "Shoes        - Total:  15 (JPG:  12, PNG:   3, WebP:   0)"
        );
    }
}
