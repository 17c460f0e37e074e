use clap::Parser;
use ecb_reporter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging before anything else can emit events
    if let Err(error) = commands::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", error);
        process::exit(1);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
