//! Delete command implementation.
//!
//! This module implements the `delete` command, which lets the customer
//! who made a booking remove its row entirely, whatever its status.
//! Deleting an active booking leaves the room window untouched and
//! surfaces a warning instead.

use clap::Args;
use uuid::Uuid;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use lodge::operations::{RemoveBookingOptions, RemoveBookingPlan};
use lodge::PlanExecutor;

/// Delete a booking.
#[derive(Args)]
pub struct DeleteCommand {
    /// Id of the booking to delete
    #[arg(value_name = "BOOKING")]
    pub booking: Uuid,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = RemoveBookingOptions::new(principal, self.booking);
        let plan = RemoveBookingPlan::new(options);

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
            return Ok(());
        }

        if !global.quiet {
            eprintln!("Deleted booking {}", self.booking);
        }

        // Print warnings to stderr if any (deleting an active booking warns)
        if !global.quiet && !result.warnings.is_empty() {
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
