//! Print the `icons` array for the web app manifest.

use log::error;
use pwa_icons::{logging, manifest_json, IconConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    match manifest_json(&IconConfig::default()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to build manifest icons: {}", e);
            ExitCode::FAILURE
        }
    }
}
