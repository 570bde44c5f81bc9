//! Stretch the logo to the fixed icon sizes.
//!
//! Run from the project root: `cargo run --bin generate_icons`

use log::error;
use pwa_icons::{generate_icons, logging, IconConfig, IconError};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    match generate_icons(&IconConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
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
