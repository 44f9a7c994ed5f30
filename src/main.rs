use std::process::ExitCode;

use clap::Parser;
use plutils::cli::Cli;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let command = &cli.command;

    if let Err(e) = plutils::logging::init_logging(command.name(), command.common().quiet) {
        eprintln!("Error initializing logging: {e}");
        return ExitCode::FAILURE;
    }
    log::info!("#Start main() plutils {}", command.name());

    match plutils::commands::run(command) {
        Ok(()) => {
            log::info!("Processing complete.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
