//! Print the dimensions of the generated icons.

use log::error;
use pwa_icons::{check_icons, logging, IconConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let report = check_icons(&IconConfig::default());
    for icon in &report.icons {
        println!("{}", icon);
    }

    let failures = report.failures();
    if failures > 0 {
        error!("{} of {} icons could not be read", failures, report.icons.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
