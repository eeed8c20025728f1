//! Book command implementation.
//!
//! This module implements the `book` command, which creates a booking
//! for a room over a stay range.

use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, today, GlobalOptions};
use lodge::operations::{CreateBookingOptions, CreateBookingPlan};
use lodge::{PlanExecutor, StayRange};

/// Book a room for a stay.
#[derive(Args)]
pub struct BookCommand {
    /// Id of the room to book
    #[arg(long, value_name = "UUID")]
    pub room: Uuid,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: NaiveDate,

    /// Check-out date (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    pub check_out: NaiveDate,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;

        let stay = StayRange::new(self.check_in, self.check_out)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = CreateBookingOptions::new(principal, self.room, stay, today());
        let plan = CreateBookingPlan::new(options);

        let mut executor = PlanExecutor::new(&mut db);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        if self.dry_run && !global.quiet {
            eprintln!("Dry run - would perform the following actions:");
            for (i, action) in result.actions_taken.iter().enumerate() {
                eprintln!("  {}. {action}", i + 1);
            }
        }

        // Output just the booking id (shell-friendly) to stdout
        if let Some(booking) = result.booking {
            println!("{}", booking.id());

            if !global.quiet && !self.dry_run {
                eprintln!(
                    "Booked room {} for {} ({} nights, total {})",
                    self.room,
                    booking.stay(),
                    booking.stay().nights(),
                    booking.total_price()
                );
            }
        }

        // Print warnings to stderr if any
        if !global.quiet && !result.warnings.is_empty() {
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
