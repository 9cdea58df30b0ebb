//! Shared dataset configuration for webptidy.
//!
//! All three tools operate on the same shape: a base data directory holding
//! one subfolder per category. The category list and codec settings are
//! defined once here and injected into every command through [`Dataset`].

use crate::error::{Result, WebpError};
use std::env;
use std::path::{Path, PathBuf};

/// Category folders processed when none are given on the command line.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Belts", "Keyboard", "Shoes", "Watch"];

/// JPEG quality used for every conversion.
pub const JPEG_QUALITY: u8 = 95;

/// Maximum number of discovered paths echoed before truncating the listing.
pub const SAMPLE_LIMIT: usize = 200;

/// Name of the data folder used when no path is given.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Prefix of the timestamped soft-delete folders created under the base.
pub const RECOVERY_DIR_PREFIX: &str = ".deleted_webp_";

/// `strftime` format of the recovery folder timestamp.
pub const RECOVERY_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// The resolved input handed to each tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Base data directory.
    pub base: PathBuf,

    /// Category folder names under `base`. Empty means "the base itself".
    pub categories: Vec<String>,
}

impl Dataset {
    /// Build a dataset with an explicit base and category list.
    pub fn new(base: impl Into<PathBuf>, categories: Vec<String>) -> Self {
        Self {
            base: base.into(),
            categories,
        }
    }

    /// Build a dataset over the default category list.
    pub fn with_default_categories(base: impl Into<PathBuf>) -> Self {
        Self::new(base, default_categories())
    }

    /// Resolve a dataset from optional command-line values.
    ///
    /// A missing `data_path` falls back to `./data`. A missing category
    /// override falls back to [`DEFAULT_CATEGORIES`]; an explicit empty list
    /// is kept as-is and means "scan the whole base".
    pub fn resolve(data_path: Option<PathBuf>, categories: Option<Vec<String>>) -> Result<Self> {
        let base = match data_path {
            Some(path) => path,
            None => default_data_path()?,
        };

        Ok(match categories {
            Some(categories) => Self::new(base, categories),
            None => Self::with_default_categories(base),
        })
    }

    /// Path of a category folder.
    pub fn category_path(&self, category: &str) -> PathBuf {
        self.base.join(category)
    }

    /// The folders a per-folder tool processes, labeled for progress output.
    ///
    /// With no categories the base itself is the only folder, labeled by its
    /// own name.
    pub fn folders(&self) -> Vec<(String, PathBuf)> {
        if self.categories.is_empty() {
            let label = self
                .base
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.base.display().to_string());
            return vec![(label, self.base.clone())];
        }
        self.categories
            .iter()
            .map(|c| (c.clone(), self.category_path(c)))
            .collect()
    }

    /// Human-readable category list for banners.
    pub fn describe_categories(&self) -> String {
        if self.categories.is_empty() {
            "(scan whole data folder)".to_string()
        } else {
            self.categories.join(", ")
        }
    }
}

/// The default category list as owned strings.
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// `<current working directory>/data`.
pub fn default_data_path() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| {
        WebpError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    Ok(data_path_under(&cwd))
}

fn data_path_under(root: &Path) -> PathBuf {
    root.join(DEFAULT_DATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn resolve_uses_explicit_path_and_default_categories() {
        let dataset = Dataset::resolve(Some(PathBuf::from("/srv/images")), None).unwrap();
        assert_eq!(dataset.base, PathBuf::from("/srv/images"));
        assert_eq!(dataset.categories, vec!["Belts", "Keyboard", "Shoes", "Watch"]);
    }

    #[test]
    fn resolve_keeps_category_override() {
        let dataset = Dataset::resolve(
            Some(PathBuf::from("/srv/images")),
            Some(vec!["Shoes".to_string()]),
        )
        .unwrap();
        assert_eq!(dataset.categories, vec!["Shoes"]);
    }

    #[test]
    fn resolve_keeps_empty_override_as_whole_base_scan() {
        let dataset = Dataset::resolve(Some(PathBuf::from("/srv/images")), Some(vec![])).unwrap();
        assert!(dataset.categories.is_empty());
        assert_eq!(dataset.describe_categories(), "(scan whole data folder)");
    }

    #[test]
    fn folders_follow_categories() {
        let dataset = Dataset::new("/srv/images", vec!["Shoes".to_string(), "Watch".to_string()]);
        assert_eq!(
            dataset.folders(),
            vec![
                ("Shoes".to_string(), PathBuf::from("/srv/images/Shoes")),
                ("Watch".to_string(), PathBuf::from("/srv/images/Watch")),
            ]
        );
    }

    #[test]
    fn folders_without_categories_is_the_base() {
        let dataset = Dataset::new("/srv/images", vec![]);
        assert_eq!(
            dataset.folders(),
            vec![("images".to_string(), PathBuf::from("/srv/images"))]
        );
    }

    #[test]
    #[serial]
    fn resolve_defaults_to_data_under_cwd() {
        let temp = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp.path());

        let dataset = Dataset::resolve(None, None).unwrap();
        let expected = std::env::current_dir().unwrap().join("data");
        assert_eq!(dataset.base, expected);
    }

    #[test]
    fn category_path_joins_base() {
        let dataset = Dataset::with_default_categories("/srv/images");
        assert_eq!(
            dataset.category_path("Watch"),
            PathBuf::from("/srv/images/Watch")
        );
        assert_eq!(dataset.describe_categories(), "Belts, Keyboard, Shoes, Watch");
    }
}
