//! Fixed icon tables.
//!
//! Every program runs from the project root and reads `public/Logo.png`.
//! [`IconConfig::with_root`] moves the whole table under another directory
//! so the same tables can be exercised against scratch directories.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PUBLIC_DIR: &str = "public";
pub const SOURCE_LOGO: &str = "Logo.png";

/// Output of the simple resizer: stretched to exactly `width` x `height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTarget {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Output of the padded generator: a `size` x `size` square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedTarget {
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    pub source: PathBuf,
    pub icons: Vec<IconTarget>,
    pub pwa_icons: Vec<PaddedTarget>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self::with_root(Path::new(""))
    }
}

impl IconConfig {
    /// Fixed tables with `public/` placed under `root`.
    pub fn with_root(root: &Path) -> Self {
        let public = root.join(PUBLIC_DIR);

        Self {
            source: public.join(SOURCE_LOGO),
            icons: vec![
                IconTarget {
                    path: public.join("icon-192.png"),
                    width: 192,
                    height: 192,
                },
                IconTarget {
                    path: public.join("icon-512.png"),
                    width: 512,
                    height: 512,
                },
            ],
            pwa_icons: vec![
                PaddedTarget {
                    path: public.join("pwa-icon-192.png"),
                    size: 192,
                },
                PaddedTarget {
                    path: public.join("pwa-icon-512.png"),
                    size: 512,
                },
            ],
        }
    }

    /// Every generated file with the dimensions it should have.
    pub fn expected_outputs(&self) -> Vec<(PathBuf, (u32, u32))> {
        self.icons
            .iter()
            .map(|t| (t.path.clone(), (t.width, t.height)))
            .chain(
                self.pwa_icons
                    .iter()
                    .map(|t| (t.path.clone(), (t.size, t.size))),
            )
            .collect()
    }
}
