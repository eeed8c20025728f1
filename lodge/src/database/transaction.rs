//! Transaction management utilities.
//!
//! This module provides transaction helpers for multi-row inventory writes.

use rusqlite::{params, TransactionBehavior};

use crate::hotel::Hotel;
use crate::room::Room;

use crate::error::Result;

use super::connection::Database;
use super::operations::date_to_text;
use super::schema::{INSERT_HOTEL, INSERT_ROOM};

impl Database {
    /// Registers a hotel together with its initial rooms in one transaction.
    ///
    /// This operation is atomic - either the hotel and every room are
    /// inserted, or nothing is. Rooms that reference a different hotel id
    /// still insert; callers are expected to pass rooms built for this
    /// hotel.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails, including a duplicate hotel name
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lodge::database::{Database, DatabaseConfig};
    /// use lodge::{Hotel, Room, RoomType};
    /// use uuid::Uuid;
    ///
    /// let config = DatabaseConfig::new("/tmp/lodge.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let hotel = Hotel::new("Seaview", Uuid::new_v4()).unwrap();
    /// let rooms = vec![
    ///     Room::builder(hotel.id(), "101", RoomType::Double, 2, 120).build().unwrap(),
    ///     Room::builder(hotel.id(), "102", RoomType::Single, 1, 80).build().unwrap(),
    /// ];
    ///
    /// db.register_hotel(&hotel, &rooms).unwrap();
    /// ```
    pub fn register_hotel(&mut self, hotel: &Hotel, rooms: &[Room]) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_HOTEL,
            params![
                hotel.id().to_string(),
                hotel.name(),
                hotel.owner().to_string()
            ],
        )?;

        {
            let mut stmt = tx.prepare(INSERT_ROOM)?;
            for room in rooms {
                stmt.execute(params![
                    room.id().to_string(),
                    room.hotel().to_string(),
                    room.name(),
                    room.room_type().to_string(),
                    room.capacity(),
                    room.nightly_rate(),
                    date_to_text(room.window().available_from()),
                    room.window().available_to().map(date_to_text),
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Inserts multiple rooms in a single transaction.
    ///
    /// This operation is atomic - either all rooms are inserted or none are.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails
    /// - The transaction cannot be committed
    pub fn batch_insert_rooms(&mut self, rooms: &[Room]) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(INSERT_ROOM)?;
            for room in rooms {
                stmt.execute(params![
                    room.id().to_string(),
                    room.hotel().to_string(),
                    room.name(),
                    room.room_type().to_string(),
                    room.capacity(),
                    room.nightly_rate(),
                    date_to_text(room.window().available_from()),
                    room.window().available_to().map(date_to_text),
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
