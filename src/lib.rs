pub mod config;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod manifest;
pub mod pad;
pub mod png;
pub mod resize;

#[cfg(test)]
mod test_support;

pub use config::{IconConfig, IconTarget, PaddedTarget};
pub use error::{IconError, Result};
pub use inspect::{check_icons, inspect_icon, IconReport, InspectionReport};
pub use manifest::{manifest_icons, manifest_json, ManifestIcon};
pub use pad::{generate_pwa_icons, pad_icon, PaddedLayout, PADDING_RATIO};
pub use png::{load_source, save_png};
pub use resize::{generate_icons, resize_exact};
