//! Padded (maskable) icons.
//!
//! The source is scaled uniformly so that its larger side covers
//! `floor(0.8 * size)` pixels, then centered on a fully transparent
//! `size` x `size` canvas. The remaining margin stays at alpha 0.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, info};
use std::path::PathBuf;

use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::png::{load_source, save_png};

/// Share of the canvas edge the scaled logo may occupy.
pub const PADDING_RATIO: f64 = 0.8;

/// Placement of the scaled source inside a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedLayout {
    pub size: u32,
    pub max_dimension: u32,
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl PaddedLayout {
    /// Fit a `src_width` x `src_height` source into a `size` square.
    ///
    /// Errors with [`IconError::InvalidSize`] when `size` or either source
    /// side is zero. Each scaled side is clamped to at least 1 pixel.
    pub fn compute(src_width: u32, src_height: u32, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(IconError::InvalidSize {
                width: size,
                height: size,
            });
        }
        if src_width == 0 || src_height == 0 {
            return Err(IconError::InvalidSize {
                width: src_width,
                height: src_height,
            });
        }

        // Float casts truncate toward zero, which is floor for these values.
        let max_dimension = (PADDING_RATIO * size as f64) as u32;
        let bound = max_dimension as f64;
        let scale = (bound / src_width as f64).min(bound / src_height as f64);

        // Very thin sources would otherwise collapse to zero pixels.
        let width = ((scale * src_width as f64) as u32).max(1);
        let height = ((scale * src_height as f64) as u32).max(1);

        Ok(Self {
            size,
            max_dimension,
            scale,
            width,
            height,
            x: (size - width) / 2,
            y: (size - height) / 2,
        })
    }

    /// Whether canvas pixel `(px, py)` falls inside the pasted region.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Build one padded `size` x `size` icon from `src`.
pub fn pad_icon(src: &RgbaImage, size: u32) -> Result<RgbaImage> {
    let layout = PaddedLayout::compute(src.width(), src.height(), size)?;
    debug!("Padded layout for {}: {:?}", size, layout);

    let mut canvas = RgbaImage::new(size, size);
    let scaled = imageops::resize(src, layout.width, layout.height, FilterType::Lanczos3);

    // The canvas is fully transparent, so pasting is a straight copy of the
    // scaled pixels, alpha included. Blending would round colour channels.
    imageops::replace(&mut canvas, &scaled, layout.x as i64, layout.y as i64);

    Ok(canvas)
}

/// Write every entry of `config.pwa_icons`.
///
/// Sizes are validated before the source is read, so an invalid table
/// writes nothing. Any later failure stops the run.
pub fn generate_pwa_icons(config: &IconConfig) -> Result<Vec<PathBuf>> {
    if let Some(bad) = config.pwa_icons.iter().find(|t| t.size == 0) {
        return Err(IconError::InvalidSize {
            width: bad.size,
            height: bad.size,
        });
    }

    let img = load_source(&config.source)?;

    let mut written = Vec::with_capacity(config.pwa_icons.len());
    for target in &config.pwa_icons {
        info!(
            "Generating padded {} ({}x{})...",
            target.path.display(),
            target.size,
            target.size
        );
        let icon = pad_icon(&img, target.size)?;
        save_png(&icon, &target.path)?;
        info!("Saved {}", target.path.display());
        written.push(target.path.clone());
    }

    Ok(written)
}
