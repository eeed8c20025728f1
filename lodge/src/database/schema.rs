//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the lodge booking system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the hotels table.
///
/// Hotel names are unique so owners cannot register the same property twice.
pub const CREATE_HOTELS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS hotels (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE,
        owner TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// Each room belongs to a hotel and carries its own availability window.
/// Dates are stored as ISO-8601 text; `available_to` is NULL for an
/// open-ended window.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id TEXT PRIMARY KEY NOT NULL,
        hotel TEXT NOT NULL REFERENCES hotels(id),
        name TEXT NOT NULL,
        room_type TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        nightly_rate INTEGER NOT NULL,
        available_from TEXT NOT NULL,
        available_to TEXT
    )";

/// SQL statement to create the bookings table.
///
/// Stay dates are stored as ISO-8601 text, `total_price` in minor currency
/// units, and `created_at` as unix seconds.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id TEXT PRIMARY KEY NOT NULL,
        customer TEXT NOT NULL,
        room TEXT NOT NULL REFERENCES rooms(id),
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        total_price INTEGER NOT NULL,
        status TEXT NOT NULL,
        is_paid INTEGER NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the rooms hotel column.
///
/// This index speeds up inventory listings and the one-stay-per-hotel check.
pub const CREATE_ROOM_HOTEL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rooms_hotel ON rooms(hotel)";

/// SQL statement to create an index on the bookings customer column.
///
/// This index speeds up conflict checks against a customer's booking history.
pub const CREATE_BOOKING_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_customer ON bookings(customer)";

/// SQL statement to create an index on the bookings room column.
///
/// This index speeds up overlap checks against a room's existing bookings.
pub const CREATE_BOOKING_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_room ON bookings(room)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a hotel.
///
/// Used by both single and batch insert operations.
pub const INSERT_HOTEL: &str = r"
    INSERT INTO hotels (id, name, owner)
    VALUES (?, ?, ?)
";

/// SQL statement to insert a room.
///
/// Used by both single and batch insert operations.
pub const INSERT_ROOM: &str = r"
    INSERT INTO rooms
    (id, hotel, name, room_type, capacity, nightly_rate, available_from, available_to)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to insert a booking.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (id, customer, room, check_in, check_out, total_price, status, is_paid, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a booking by id.
pub const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE id = ?";
