use urlcanon_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging when possible, stderr otherwise.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::debug!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlcanon error: {:#}", err);
        std::process::exit(1);
    }
}
