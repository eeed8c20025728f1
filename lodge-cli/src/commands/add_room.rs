//! Add-room command implementation.
//!
//! This module implements the `add-room` command, which adds a room to a
//! hotel owned by the acting user.

use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, today, GlobalOptions};
use lodge::{Database, Role, Room, RoomType};

/// Add a room to a hotel.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Id of the hotel the room belongs to
    #[arg(long, value_name = "UUID")]
    pub hotel: Uuid,

    /// Room name (e.g. "101")
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Room type (single, double, suite)
    #[arg(long, value_name = "TYPE", default_value = "double")]
    pub room_type: RoomType,

    /// Maximum number of guests
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    pub capacity: u8,

    /// Price per night
    #[arg(long, value_name = "AMOUNT")]
    pub nightly_rate: i64,

    /// First date the room is open for booking (default: today)
    #[arg(long, value_name = "DATE")]
    pub available_from: Option<NaiveDate>,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = global.principal()?;
        principal.require_role(Role::HotelOwner).map_err(CliError::from)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // Only the hotel's owner may extend its inventory.
        let hotel = Database::get_hotel(db.connection(), self.hotel)
            .map_err(CliError::from)?
            .ok_or_else(|| {
                CliError::Library(lodge::Error::NotFound {
                    resource: format!("Hotel {}", self.hotel),
                })
            })?;
        if hotel.owner() != principal.subject {
            return Err(CliError::Library(lodge::Error::Forbidden {
                details: "you do not own this hotel".to_string(),
            }));
        }

        let available_from = self.available_from.unwrap_or_else(today);
        let room = Room::builder(
            hotel.id(),
            &self.name,
            self.room_type,
            self.capacity,
            self.nightly_rate,
        )
        .available_from(available_from)
        .build()
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        db.batch_insert_rooms(std::slice::from_ref(&room))
            .map_err(CliError::from)?;

        // Output just the room id (shell-friendly) to stdout
        println!("{}", room.id());

        if !global.quiet {
            eprintln!(
                "Added room '{}' to hotel '{}' (open from {available_from})",
                room.name(),
                hotel.name()
            );
        }

        Ok(())
    }
}
