use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("{} not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;
