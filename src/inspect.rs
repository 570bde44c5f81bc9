use log::warn;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::IconConfig;
use crate::error::{IconError, Result};

/// Outcome of inspecting one file.
#[derive(Debug)]
pub struct IconReport {
    pub path: PathBuf,
    pub expected: (u32, u32),
    pub result: Result<(u32, u32)>,
}

impl IconReport {
    pub fn matches_expected(&self) -> bool {
        matches!(&self.result, Ok(actual) if *actual == self.expected)
    }
}

impl fmt::Display for IconReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok((width, height)) => write!(
                f,
                "{}: Width: {}, Height: {}",
                self.path.display(),
                width,
                height
            ),
            Err(e) => write!(f, "Error with {}: {}", self.path.display(), e),
        }
    }
}

#[derive(Debug, Default)]
pub struct InspectionReport {
    pub icons: Vec<IconReport>,
}

impl InspectionReport {
    pub fn failures(&self) -> usize {
        self.icons.iter().filter(|r| r.result.is_err()).count()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &IconReport> {
        self.icons
            .iter()
            .filter(|r| r.result.is_ok() && !r.matches_expected())
    }
}

/// Read the pixel dimensions of `path` from its header.
pub fn inspect_icon(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Inspect every generated icon. A failing file never stops the others.
pub fn check_icons(config: &IconConfig) -> InspectionReport {
    let icons = config
        .expected_outputs()
        .into_iter()
        .map(|(path, expected)| {
            let result = inspect_icon(&path);
            let report = IconReport {
                path,
                expected,
                result,
            };
            if let Ok((width, height)) = &report.result {
                if !report.matches_expected() {
                    warn!(
                        "{} is {}x{}, expected {}x{}",
                        report.path.display(),
                        width,
                        height,
                        expected.0,
                        expected.1
                    );
                }
            }
            report
        })
        .collect();

    InspectionReport { icons }
}
