//! Main entry point for the lodge CLI.
//!
//! This is the command-line interface for the lodge booking engine.
//! It provides commands for managing hotel room bookings:
//! - `book`: Book a room for a stay
//! - `cancel`: Cancel a pending booking
//! - `approve` / `reject`: Decide a booking as the hotel owner
//! - `pay`: Pay for a booking
//! - `delete`: Delete a booking
//! - `list`: List bookings visible to the acting user

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use lodge::operations::Decision;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = lodge::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        actor: cli.actor,
        role: cli.role,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::AddHotel(cmd) => cmd.execute(&global),
        cli::Command::AddRoom(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Approve(cmd) => cmd.execute(&global, Decision::Approve),
        cli::Command::Reject(cmd) => cmd.execute(&global, Decision::Reject),
        cli::Command::Pay(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
