use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::info;
use std::path::PathBuf;

use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::png::{load_source, save_png};

/// Resize to exactly `width` x `height` with Lanczos3.
///
/// The aspect ratio of `img` is not preserved; non-square sources are
/// stretched to fill the target.
pub fn resize_exact(img: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(IconError::InvalidSize { width, height });
    }
    Ok(imageops::resize(img, width, height, FilterType::Lanczos3))
}

/// Stretch the source logo to every entry of `config.icons`.
///
/// Stops at the first failure; files written before it are left in place.
pub fn generate_icons(config: &IconConfig) -> Result<Vec<PathBuf>> {
    if let Some(bad) = config.icons.iter().find(|t| t.width == 0 || t.height == 0) {
        return Err(IconError::InvalidSize {
            width: bad.width,
            height: bad.height,
        });
    }

    let img = load_source(&config.source)?;

    let mut written = Vec::with_capacity(config.icons.len());
    for target in &config.icons {
        info!(
            "Generating {} ({}x{})...",
            target.path.display(),
            target.width,
            target.height
        );
        let resized = resize_exact(&img, target.width, target.height)?;
        save_png(&resized, &target.path)?;
        info!("Saved {}", target.path.display());
        written.push(target.path.clone());
    }

    Ok(written)
}
