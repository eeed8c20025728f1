//! Decide command implementation.
//!
//! This module implements the `approve` and `reject` commands, which let
//! the hotel owner decide a booking. Both share the same argument shape;
//! the decision comes from the subcommand name.

use clap::Args;
use uuid::Uuid;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, today, GlobalOptions};
use lodge::operations::{DecideBookingOptions, DecideBookingPlan, Decision};
use lodge::PlanExecutor;

/// Approve or reject a booking.
#[derive(Args)]
pub struct DecideCommand {
    /// Id of the booking to decide
    #[arg(value_name = "BOOKING")]
    pub booking: Uuid,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl DecideCommand {
    /// Execute the approve or reject command.
    pub fn execute(self, global: &GlobalOptions, decision: Decision) -> Result<(), CliError> {
        let principal = global.principal()?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = DecideBookingOptions::new(principal, self.booking, decision, today());
        let plan = DecideBookingPlan::new(options);

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
            let verb = match decision {
                Decision::Approve => "Approved",
                Decision::Reject => "Rejected",
            };
            eprintln!("{verb} booking {}", self.booking);
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
