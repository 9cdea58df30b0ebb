//! WebP to JPEG conversion.
//!
//! A conversion writes `name.jpg` next to `name.webp`. An existing sibling is
//! never overwritten and the source is never deleted here; callers decide
//! what happens to the WebP afterwards.

use crate::config::Dataset;
use crate::error::{Result, WebpError};
use crate::fs::atomic_write;
use crate::scan::find_webp_in_folder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult};
use std::path::{Path, PathBuf};

/// Result of converting one file.
#[derive(Debug)]
pub enum ConvertOutcome {
    /// A new JPEG sibling was written.
    Converted(PathBuf),
    /// The JPEG sibling already existed; nothing was written.
    Skipped(PathBuf),
    /// Decoding or encoding failed; no sibling was produced.
    Failed(WebpError),
}

/// Converted/skipped/failed tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionCounts {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ConversionCounts {
    fn record(&mut self, outcome: &ConvertOutcome) {
        match outcome {
            ConvertOutcome::Converted(_) => self.converted += 1,
            ConvertOutcome::Skipped(_) => self.skipped += 1,
            ConvertOutcome::Failed(_) => self.failed += 1,
        }
    }

    fn add(&mut self, other: &ConversionCounts) {
        self.converted += other.converted;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Per-category conversion results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConversion {
    pub category: String,
    pub counts: ConversionCounts,
}

/// Results of a batch conversion over a dataset.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Categories whose folder existed, in processing order.
    pub categories: Vec<CategoryConversion>,
    /// Categories whose folder was missing.
    pub missing: Vec<String>,
    pub total: ConversionCounts,
}

/// Fail fast when the image codec cannot decode WebP or encode JPEG.
///
/// Both formats are enabled by the `image` crate's default features, so this
/// only trips on a build that turned them off.
pub fn ensure_codecs_available() -> Result<()> {
    if !ImageFormat::WebP.reading_enabled() {
        return Err(WebpError::MissingCodec(
            "WebP decoding is not compiled in; rebuild with the `image` crate's `webp` feature"
                .to_string(),
        ));
    }
    if !ImageFormat::Jpeg.writing_enabled() {
        return Err(WebpError::MissingCodec(
            "JPEG encoding is not compiled in; rebuild with the `image` crate's `jpeg` feature"
                .to_string(),
        ));
    }
    Ok(())
}

/// The `.jpg` sibling of an image path.
pub fn jpeg_sibling(path: &Path) -> PathBuf {
    path.with_extension("jpg")
}

/// Convert one WebP file to a JPEG sibling at the given quality.
pub fn convert_one(webp: &Path, quality: u8) -> ConvertOutcome {
    let jpeg = jpeg_sibling(webp);
    if jpeg.exists() {
        tracing::debug!(path = %jpeg.display(), "JPEG sibling exists, skipping");
        return ConvertOutcome::Skipped(jpeg);
    }

    match write_jpeg(webp, &jpeg, quality) {
        Ok(()) => ConvertOutcome::Converted(jpeg),
        Err(e) => {
            tracing::debug!("{}", e);
            ConvertOutcome::Failed(e)
        }
    }
}

fn write_jpeg(source: &Path, destination: &Path, quality: u8) -> Result<()> {
    let img = decode(source)?;
    let bytes = encode_jpeg(&img, quality).map_err(|e| WebpError::encode(destination, e))?;
    atomic_write(destination, &bytes).map_err(|e| WebpError::encode(destination, e))
}

/// Decode an image, detecting the format from its content.
fn decode(source: &Path) -> Result<DynamicImage> {
    ImageReader::open(source)
        .map_err(|e| WebpError::decode(source, e))?
        .with_guessed_format()
        .map_err(|e| WebpError::decode(source, e))?
        .decode()
        .map_err(|e| WebpError::decode(source, e))
}

/// Encode an image as an 8-bit RGB JPEG, dropping any alpha channel.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> ImageResult<Vec<u8>> {
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        encoder.encode_image(&rgb)?;
    }
    Ok(buffer)
}

/// Convert every WebP file directly inside each category folder, or inside
/// the base when the dataset has no categories.
///
/// Prints one line per converted or failed file. Missing folders are
/// reported and skipped.
pub fn convert_dataset(dataset: &Dataset, quality: u8) -> Result<ConversionReport> {
    let mut report = ConversionReport::default();

    for (category, folder) in dataset.folders() {
        if !folder.is_dir() {
            println!("Folder not found: {}", folder.display());
            report.missing.push(category);
            continue;
        }

        println!();
        println!("Processing {} folder...", category);

        let mut counts = ConversionCounts::default();
        for webp in find_webp_in_folder(&folder, false)? {
            let outcome = convert_one(&webp, quality);
            match &outcome {
                ConvertOutcome::Converted(_) => println!("  Converted: {}", display_name(&webp)),
                ConvertOutcome::Skipped(_) => {}
                ConvertOutcome::Failed(e) => {
                    println!("  Failed to convert {}: {}", display_name(&webp), e)
                }
            }
            counts.record(&outcome);
        }

        println!("  Converted {} files in {}", counts.converted, category);
        report.total.add(&counts);
        report.categories.push(CategoryConversion { category, counts });
    }

    Ok(report)
}

/// File name for progress lines.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_jpeg_fixture, write_webp_fixture};
    use image::ColorType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn codecs_are_available_in_default_build() {
        assert!(ensure_codecs_available().is_ok());
    }

    #[test]
    fn jpeg_sibling_replaces_extension() {
        assert_eq!(
            jpeg_sibling(Path::new("data/Shoes/a.webp")),
            PathBuf::from("data/Shoes/a.jpg")
        );
        assert_eq!(
            jpeg_sibling(Path::new("data/Shoes/a.b.webp")),
            PathBuf::from("data/Shoes/a.b.jpg")
        );
    }

    #[test]
    fn converts_to_rgb_jpeg_and_keeps_source() {
        let temp = TempDir::new().unwrap();
        let webp = temp.path().join("a.webp");
        write_webp_fixture(&webp);

        let outcome = convert_one(&webp, 95);

        let jpeg = temp.path().join("a.jpg");
        assert!(matches!(outcome, ConvertOutcome::Converted(ref p) if *p == jpeg));
        assert!(webp.exists());

        let decoded = image::open(&jpeg).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[test]
    fn existing_sibling_is_skipped_and_untouched() {
        let temp = TempDir::new().unwrap();
        let webp = temp.path().join("b.webp");
        let jpeg = temp.path().join("b.jpg");
        write_webp_fixture(&webp);
        fs::write(&jpeg, b"keep me").unwrap();

        let outcome = convert_one(&webp, 95);

        assert!(matches!(outcome, ConvertOutcome::Skipped(_)));
        assert_eq!(fs::read(&jpeg).unwrap(), b"keep me");
    }

    #[test]
    fn undecodable_source_fails_without_sibling() {
        let temp = TempDir::new().unwrap();
        let webp = temp.path().join("broken.webp");
        fs::write(&webp, b"not an image at all").unwrap();

        let outcome = convert_one(&webp, 95);

        assert!(matches!(outcome, ConvertOutcome::Failed(WebpError::Decode { .. })));
        assert!(!temp.path().join("broken.jpg").exists());
        assert!(webp.exists());
    }

    #[test]
    fn encode_drops_alpha() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([10, 20, 30, 0]),
        ));

        let bytes = encode_jpeg(&img, 95).unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).unwrap();

        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn batch_counts_per_category_and_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        write_webp_fixture(&base.join("Shoes/a.webp"));
        write_webp_fixture(&base.join("Shoes/b.webp"));
        write_jpeg_fixture(&base.join("Shoes/b.jpg"));
        fs::create_dir_all(base.join("Watch")).unwrap();
        fs::write(base.join("Watch/bad.webp"), b"garbage").unwrap();

        let dataset = Dataset::with_default_categories(base);
        let first = convert_dataset(&dataset, 95).unwrap();

        assert_eq!(first.missing, vec!["Belts", "Keyboard"]);
        assert_eq!(
            first.categories[0],
            CategoryConversion {
                category: "Shoes".to_string(),
                counts: ConversionCounts { converted: 1, skipped: 1, failed: 0 },
            }
        );
        assert_eq!(first.categories[1].counts.failed, 1);
        assert_eq!(first.total, ConversionCounts { converted: 1, skipped: 1, failed: 1 });
        assert!(base.join("Shoes/a.jpg").exists());

        let second = convert_dataset(&dataset, 95).unwrap();
        assert_eq!(second.total.converted, 0);
        assert_eq!(second.total.skipped, 2);
    }

    #[test]
    fn batch_without_categories_converts_the_base_folder() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("images");
        write_webp_fixture(&base.join("top.webp"));
        write_webp_fixture(&base.join("Shoes/a.webp"));

        let report = convert_dataset(&Dataset::new(&base, vec![]), 95).unwrap();

        assert!(report.missing.is_empty());
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "images");
        assert_eq!(report.total.converted, 1);
        assert!(base.join("top.jpg").exists());
        assert!(!base.join("Shoes/a.jpg").exists());
    }
}
