use image::{ImageFormat, RgbaImage};
use log::debug;
use std::path::Path;

use crate::error::{IconError, Result};

/// Load the source logo and normalize it to RGBA.
///
/// A missing file is reported as [`IconError::SourceNotFound`] before any
/// decoding is attempted.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(IconError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path)
        .map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Write `img` as a PNG regardless of the extension of `path`.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
