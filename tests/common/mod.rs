use image::{Rgba, RgbaImage};
use pwa_icons::IconConfig;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Throwaway project root with an empty `public/`, removed on drop.
pub struct Site {
    root: PathBuf,
    pub config: IconConfig,
}

impl Site {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("pwa-icons-it-{}", Uuid::new_v4()));
        fs::create_dir_all(root.join("public")).unwrap();
        let config = IconConfig::with_root(&root);
        Self { root, config }
    }

    pub fn public_entries(&self) -> usize {
        fs::read_dir(self.root.join("public")).unwrap().count()
    }

    /// Opaque logo with a transparent stripe down the left edge.
    pub fn write_logo(&self, width: u32, height: u32) {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 10 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([0, 153, 255, 255])
            }
        });
        img.save(&self.config.source).unwrap();
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
