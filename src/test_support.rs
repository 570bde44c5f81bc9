use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Temporary directory removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("pwa-icons-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Fully opaque logo so that the pasted region is easy to find by alpha.
pub fn opaque_logo(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 153, 255, 255]))
}

pub fn write_logo(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    opaque_logo(width, height).save(path).unwrap();
}
