//! Pay command implementation.
//!
//! This module implements the `pay` command, which marks a booking as
//! paid. Payment never changes the booking status; a pending booking
//! stays pending until the owner decides it.

use clap::Args;
use uuid::Uuid;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use lodge::operations::{PayBookingOptions, PayBookingPlan};
use lodge::PlanExecutor;

/// Pay for a booking.
#[derive(Args)]
pub struct PayCommand {
    /// Id of the booking to pay for
    #[arg(value_name = "BOOKING")]
    pub booking: Uuid,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl PayCommand {
    /// Execute the pay command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = PayBookingOptions::new(principal, self.booking);
        let plan = PayBookingPlan::new(options);

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
            if let Some(booking) = result.booking {
                eprintln!(
                    "Paid booking {} (total {})",
                    booking.id(),
                    booking.total_price()
                );
            }
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
