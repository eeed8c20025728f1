//! Database CRUD operations for hotels, rooms, and bookings.
//!
//! This module implements all create, read, update, and delete operations
//! for the booking engine's persistent state. All functions are scoped to a
//! [`Connection`] so they work equally inside a transaction, which is how
//! the plan executor calls them.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::booking::{Booking, BookingStatus};
use crate::error::Result;
use crate::hotel::Hotel;
use crate::room::{AvailabilityWindow, Room, RoomType};
use crate::stay::StayRange;

use super::connection::Database;
use super::schema::{DELETE_BOOKING, INSERT_BOOKING, INSERT_HOTEL, INSERT_ROOM};

/// Date format used for all date columns.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date for database storage.
pub(super) fn date_to_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a date column back into a [`NaiveDate`].
pub(super) fn text_to_date(text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Parses a TEXT id column back into a [`Uuid`].
pub(super) fn text_to_uuid(text: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(text).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Converts Unix epoch seconds from the database to a UTC timestamp.
fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "timestamp out of range: {secs}"
        ))))
    })
}

/// Wraps a domain-level conversion failure for use inside a row mapper.
fn conversion_error(e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
}

/// Helper function to deserialize a hotel from a database row.
///
/// Expects row fields in this order: id, name, owner
fn row_to_hotel(row: &rusqlite::Row<'_>) -> rusqlite::Result<Hotel> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let owner: String = row.get(2)?;

    Hotel::with_id(text_to_uuid(&id)?, &name, text_to_uuid(&owner)?).map_err(conversion_error)
}

/// Helper function to deserialize a room from a database row.
///
/// Expects row fields in this order: id, hotel, name, `room_type`, capacity,
/// `nightly_rate`, `available_from`, `available_to`
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id: String = row.get(0)?;
    let hotel: String = row.get(1)?;
    let name: String = row.get(2)?;
    let room_type: String = row.get(3)?;
    let capacity: u8 = row.get(4)?;
    let nightly_rate: i64 = row.get(5)?;
    let available_from: String = row.get(6)?;
    let available_to: Option<String> = row.get(7)?;

    let room_type = RoomType::from_str(&room_type)
        .map_err(|e| conversion_error(std::io::Error::other(e)))?;

    let from = text_to_date(&available_from)?;
    let window = match available_to {
        Some(to) => AvailabilityWindow::new(from, Some(text_to_date(&to)?))
            .map_err(conversion_error)?,
        None => AvailabilityWindow::open_from(from),
    };

    Room::builder(text_to_uuid(&hotel)?, &name, room_type, capacity, nightly_rate)
        .id(text_to_uuid(&id)?)
        .window(window)
        .build()
        .map_err(conversion_error)
}

/// Helper function to deserialize a booking from a database row.
///
/// Expects row fields in this order: id, customer, room, `check_in`,
/// `check_out`, `total_price`, status, `is_paid`, `created_at`
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let id: String = row.get(0)?;
    let customer: String = row.get(1)?;
    let room: String = row.get(2)?;
    let check_in: String = row.get(3)?;
    let check_out: String = row.get(4)?;
    let total_price: i64 = row.get(5)?;
    let status: String = row.get(6)?;
    let is_paid: bool = row.get(7)?;
    let created_secs: i64 = row.get(8)?;

    let stay = StayRange::new(text_to_date(&check_in)?, text_to_date(&check_out)?)
        .map_err(conversion_error)?;
    let status = BookingStatus::from_str(&status)
        .map_err(|e| conversion_error(std::io::Error::other(e)))?;

    Booking::builder(text_to_uuid(&customer)?, text_to_uuid(&room)?, stay, total_price)
        .id(text_to_uuid(&id)?)
        .status(status)
        .is_paid(is_paid)
        .created_at(unix_secs_to_datetime(created_secs)?)
        .build()
        .map_err(conversion_error)
}

// SQL statements for CRUD operations
const SELECT_HOTEL: &str = "SELECT id, name, owner FROM hotels WHERE id = ?";

const LIST_HOTELS: &str = "SELECT id, name, owner FROM hotels ORDER BY name";

const SELECT_ROOM: &str = r"
    SELECT id, hotel, name, room_type, capacity, nightly_rate, available_from, available_to
    FROM rooms
    WHERE id = ?
";

const LIST_ROOMS: &str = r"
    SELECT id, hotel, name, room_type, capacity, nightly_rate, available_from, available_to
    FROM rooms
    ORDER BY hotel, name
";

const LIST_ROOMS_BY_HOTEL: &str = r"
    SELECT id, hotel, name, room_type, capacity, nightly_rate, available_from, available_to
    FROM rooms
    WHERE hotel = ?
    ORDER BY name
";

const SELECT_ROOM_IDS_BY_HOTEL: &str = "SELECT id FROM rooms WHERE hotel = ?";

const UPDATE_ROOM_WINDOW: &str = r"
    UPDATE rooms
    SET available_from = ?, available_to = ?
    WHERE id = ?
";

const SELECT_BOOKING: &str = r"
    SELECT id, customer, room, check_in, check_out, total_price, status, is_paid, created_at
    FROM bookings
    WHERE id = ?
";

const LIST_BOOKINGS: &str = r"
    SELECT id, customer, room, check_in, check_out, total_price, status, is_paid, created_at
    FROM bookings
    ORDER BY created_at, id
";

const SELECT_BOOKINGS_BY_CUSTOMER: &str = r"
    SELECT id, customer, room, check_in, check_out, total_price, status, is_paid, created_at
    FROM bookings
    WHERE customer = ?
    ORDER BY created_at, id
";

const SELECT_ACTIVE_BOOKINGS_BY_ROOM: &str = r"
    SELECT id, customer, room, check_in, check_out, total_price, status, is_paid, created_at
    FROM bookings
    WHERE room = ? AND status IN ('pending', 'approved')
    ORDER BY check_in
";

const SELECT_BOOKINGS_BY_OWNER: &str = r"
    SELECT b.id, b.customer, b.room, b.check_in, b.check_out,
           b.total_price, b.status, b.is_paid, b.created_at
    FROM bookings b
    JOIN rooms r ON b.room = r.id
    JOIN hotels h ON r.hotel = h.id
    WHERE h.owner = ?
    ORDER BY b.created_at, b.id
";

const UPDATE_BOOKING_STATUS: &str = "UPDATE bookings SET status = ? WHERE id = ?";

const UPDATE_BOOKING_PAID: &str = "UPDATE bookings SET is_paid = 1 WHERE id = ?";

impl Database {
    /// Inserts a hotel.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when a hotel with
    /// the same name already exists.
    pub fn insert_hotel(conn: &Connection, hotel: &Hotel) -> Result<()> {
        conn.execute(
            INSERT_HOTEL,
            params![
                hotel.id().to_string(),
                hotel.name(),
                hotel.owner().to_string()
            ],
        )?;
        Ok(())
    }

    /// Retrieves a hotel by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(hotel))` if the hotel exists
    /// - `Ok(None)` if the hotel doesn't exist
    pub fn get_hotel(conn: &Connection, id: Uuid) -> Result<Option<Hotel>> {
        let mut stmt = conn.prepare(SELECT_HOTEL)?;
        match stmt.query_row(params![id.to_string()], row_to_hotel) {
            Ok(hotel) => Ok(Some(hotel)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all hotels ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hotels(conn: &Connection) -> Result<Vec<Hotel>> {
        let mut stmt = conn.prepare(LIST_HOTELS)?;
        let rows = stmt.query_map([], row_to_hotel)?;
        let mut hotels = Vec::new();
        for hotel in rows {
            hotels.push(hotel?);
        }
        Ok(hotels)
    }

    /// Inserts a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_room(conn: &Connection, room: &Room) -> Result<()> {
        conn.execute(
            INSERT_ROOM,
            params![
                room.id().to_string(),
                room.hotel().to_string(),
                room.name(),
                room.room_type().to_string(),
                room.capacity(),
                room.nightly_rate(),
                date_to_text(room.window().available_from()),
                room.window().available_to().map(date_to_text),
            ],
        )?;
        Ok(())
    }

    /// Retrieves a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(room))` if the room exists
    /// - `Ok(None)` if the room doesn't exist
    pub fn get_room(conn: &Connection, id: Uuid) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM)?;
        match stmt.query_row(params![id.to_string()], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists rooms, optionally filtered to a single hotel.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection, hotel: Option<Uuid>) -> Result<Vec<Room>> {
        let mut rooms = Vec::new();
        match hotel {
            Some(hotel) => {
                let mut stmt = conn.prepare(LIST_ROOMS_BY_HOTEL)?;
                let rows = stmt.query_map(params![hotel.to_string()], row_to_room)?;
                for room in rows {
                    rooms.push(room?);
                }
            }
            None => {
                let mut stmt = conn.prepare(LIST_ROOMS)?;
                let rows = stmt.query_map([], row_to_room)?;
                for room in rows {
                    rooms.push(room?);
                }
            }
        }
        Ok(rooms)
    }

    /// Returns the set of room ids belonging to a hotel.
    ///
    /// Used by the conflict detector's one-stay-per-hotel rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn room_ids_by_hotel(conn: &Connection, hotel: Uuid) -> Result<HashSet<Uuid>> {
        let mut stmt = conn.prepare(SELECT_ROOM_IDS_BY_HOTEL)?;
        let rows = stmt.query_map(params![hotel.to_string()], |row| {
            let id: String = row.get(0)?;
            text_to_uuid(&id)
        })?;
        let mut ids = HashSet::new();
        for id in rows {
            ids.insert(id?);
        }
        Ok(ids)
    }

    /// Updates a room's availability window.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the room was found and updated
    /// - `Ok(false)` if the room was not found
    pub fn update_room_window(
        conn: &Connection,
        room: Uuid,
        window: AvailabilityWindow,
    ) -> Result<bool> {
        let rows = conn.execute(
            UPDATE_ROOM_WINDOW,
            params![
                date_to_text(window.available_from()),
                window.available_to().map(date_to_text),
                room.to_string(),
            ],
        )?;
        Ok(rows > 0)
    }

    /// Inserts a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_booking(conn: &Connection, booking: &Booking) -> Result<()> {
        conn.execute(
            INSERT_BOOKING,
            params![
                booking.id().to_string(),
                booking.customer().to_string(),
                booking.room().to_string(),
                date_to_text(booking.stay().check_in()),
                date_to_text(booking.stay().check_out()),
                booking.total_price(),
                booking.status().to_string(),
                booking.is_paid(),
                booking.created_at().timestamp(),
            ],
        )?;
        Ok(())
    }

    /// Retrieves a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(booking))` if the booking exists
    /// - `Ok(None)` if the booking doesn't exist
    pub fn get_booking(conn: &Connection, id: Uuid) -> Result<Option<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKING)?;
        match stmt.query_row(params![id.to_string()], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all bookings in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(LIST_BOOKINGS)?;
        let rows = stmt.query_map([], row_to_booking)?;
        let mut bookings = Vec::new();
        for booking in rows {
            bookings.push(booking?);
        }
        Ok(bookings)
    }

    /// Lists all bookings made by a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings_by_customer(conn: &Connection, customer: Uuid) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKINGS_BY_CUSTOMER)?;
        let rows = stmt.query_map(params![customer.to_string()], row_to_booking)?;
        let mut bookings = Vec::new();
        for booking in rows {
            bookings.push(booking?);
        }
        Ok(bookings)
    }

    /// Lists the pending and approved bookings for a room.
    ///
    /// Cancelled and rejected bookings no longer hold the room, so the
    /// conflict detector only needs the active ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_bookings_by_room(conn: &Connection, room: Uuid) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_ACTIVE_BOOKINGS_BY_ROOM)?;
        let rows = stmt.query_map(params![room.to_string()], row_to_booking)?;
        let mut bookings = Vec::new();
        for booking in rows {
            bookings.push(booking?);
        }
        Ok(bookings)
    }

    /// Lists all bookings across every hotel belonging to an owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings_by_owner(conn: &Connection, owner: Uuid) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKINGS_BY_OWNER)?;
        let rows = stmt.query_map(params![owner.to_string()], row_to_booking)?;
        let mut bookings = Vec::new();
        for booking in rows {
            bookings.push(booking?);
        }
        Ok(bookings)
    }

    /// Updates a booking's status.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was found and updated
    /// - `Ok(false)` if the booking was not found
    pub fn update_booking_status(
        conn: &Connection,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<bool> {
        let rows = conn.execute(
            UPDATE_BOOKING_STATUS,
            params![status.to_string(), id.to_string()],
        )?;
        Ok(rows > 0)
    }

    /// Marks a booking as paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was found and updated
    /// - `Ok(false)` if the booking was not found
    pub fn mark_booking_paid(conn: &Connection, id: Uuid) -> Result<bool> {
        let rows = conn.execute(UPDATE_BOOKING_PAID, params![id.to_string()])?;
        Ok(rows > 0)
    }

    /// Deletes a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking existed and was deleted
    /// - `Ok(false)` if the booking did not exist
    pub fn delete_booking(conn: &Connection, id: Uuid) -> Result<bool> {
        let rows = conn.execute(DELETE_BOOKING, params![id.to_string()])?;
        Ok(rows > 0)
    }
}
