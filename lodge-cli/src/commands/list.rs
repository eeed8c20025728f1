//! List command implementation.
//!
//! This module implements the `list` command, which displays bookings in
//! various formats (table, JSON, CSV). What is listed depends on the
//! acting role: customers see their own bookings, hotel owners see every
//! booking on rooms of hotels they own.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use lodge::{Database, OutputFormat, Role};

/// List bookings visible to the acting user.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (table, json, csv)
    #[arg(long, value_name = "FORMAT", env = "LODGE_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;

        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database (read-only access is fine)
        let db = open_database(global, &config)?;

        // 3. Query bookings by role
        let bookings = match principal.role {
            Role::Customer => Database::bookings_by_customer(db.connection(), principal.subject),
            Role::HotelOwner => Database::bookings_by_owner(db.connection(), principal.subject),
        }
        .map_err(CliError::from)?;

        // 4. Format and output to stdout
        // Priority: flag > config file > table
        let format = self
            .format
            .or(config.output_format)
            .unwrap_or(OutputFormat::Table);

        let formatter = format.create_formatter();
        let rendered = formatter.format(&bookings).map_err(CliError::from)?;
        println!("{rendered}");

        Ok(())
    }
}
