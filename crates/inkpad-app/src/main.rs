//! Inkpad command line entry point.

use clap::Parser;
use inkpad_app::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Inkpad");

    match inkpad_app::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("inkpad: {e}");
            ExitCode::FAILURE
        }
    }
}
