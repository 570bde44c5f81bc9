//! Padded PWA icons: the logo scaled to 80% of each square and centered on
//! a transparent canvas.
//!
//! Run from the project root: `cargo run --bin generate_pwa_icons`

use log::{error, info};
use pwa_icons::{generate_pwa_icons, logging, IconConfig, IconError};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let config = IconConfig::default();
    match generate_pwa_icons(&config) {
        Ok(written) => {
            info!("Created {} padded icons", written.len());
            ExitCode::SUCCESS
        }
        Err(e @ IconError::SourceNotFound { .. }) => {
            error!("Error: {}.", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
