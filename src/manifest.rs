//! `icons` entries for the web app manifest.
//!
//! `public/` is served at the site root, so an icon at
//! `public/icon-192.png` is referenced as `/icon-192.png`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::IconConfig;
use crate::error::Result;

pub const PNG_MIME: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

impl ManifestIcon {
    fn new(path: &Path, width: u32, height: u32, purpose: &str) -> Self {
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self {
            src: format!("/{}", file_name),
            sizes: format!("{}x{}", width, height),
            mime_type: PNG_MIME.to_string(),
            purpose: purpose.to_string(),
        }
    }
}

/// Direct icons are listed as `any`, padded icons as `maskable`.
pub fn manifest_icons(config: &IconConfig) -> Vec<ManifestIcon> {
    let direct = config
        .icons
        .iter()
        .map(|t| ManifestIcon::new(&t.path, t.width, t.height, "any"));
    let padded = config
        .pwa_icons
        .iter()
        .map(|t| ManifestIcon::new(&t.path, t.size, t.size, "maskable"));

    direct.chain(padded).collect()
}

pub fn manifest_json(config: &IconConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&manifest_icons(config))?)
}
