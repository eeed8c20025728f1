//! Add-hotel command implementation.
//!
//! This module implements the `add-hotel` command, which registers a
//! hotel owned by the acting user. The booking engine needs an inventory
//! to book against; this is the thin entry point for it.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use lodge::{Hotel, Role};

/// Register a hotel owned by the acting user.
#[derive(Args)]
pub struct AddHotelCommand {
    /// Hotel name (must be unique)
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl AddHotelCommand {
    /// Execute the add-hotel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;
        principal.require_role(Role::HotelOwner).map_err(CliError::from)?;

        let hotel = Hotel::new(&self.name, principal.subject)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        db.register_hotel(&hotel, &[]).map_err(CliError::from)?;

        // Output just the hotel id (shell-friendly) to stdout
        println!("{}", hotel.id());

        if !global.quiet {
            eprintln!("Registered hotel '{}'", hotel.name());
        }

        Ok(())
    }
}
