//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which cancels a pending
//! booking and reopens the room from today.

use clap::Args;
use uuid::Uuid;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, today, GlobalOptions};
use lodge::operations::{CancelBookingOptions, CancelBookingPlan};
use lodge::PlanExecutor;

/// Cancel a pending booking.
#[derive(Args)]
pub struct CancelCommand {
    /// Id of the booking to cancel
    #[arg(value_name = "BOOKING")]
    pub booking: Uuid,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = CancelBookingOptions::new(principal, self.booking, today());
        let plan = CancelBookingPlan::new(options);

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
            eprintln!("Cancelled booking {}", self.booking);
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
