use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write an 8x6 RGBA WebP with varying transparency.
pub(crate) fn write_webp_fixture(path: &Path) {
    ensure_parent(path);
    let img = RgbaImage::from_fn(8, 6, |x, y| {
        Rgba([(x * 30) as u8, (y * 40) as u8, 128, (x * y * 5) as u8])
    });
    img.save_with_format(path, ImageFormat::WebP).unwrap();
}

/// Write a small real JPEG.
pub(crate) fn write_jpeg_fixture(path: &Path) {
    ensure_parent(path);
    let img = RgbImage::from_pixel(4, 4, Rgb([200, 100, 50]));
    img.save_with_format(path, ImageFormat::Jpeg).unwrap();
}

/// Write a file whose content is irrelevant (PNG/WebP stand-ins for counting and deleting).
pub(crate) fn touch(path: &Path) {
    ensure_parent(path);
    std::fs::write(path, b"placeholder").unwrap();
}

/// A temp dataset with the four default category folders created.
pub(crate) fn create_test_dataset() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for category in crate::config::DEFAULT_CATEGORIES {
        std::fs::create_dir_all(temp_dir.path().join(category)).unwrap();
    }
    temp_dir
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}
