//! Database layer for persistent storage of hotels, rooms, and bookings.
//!
//! This module provides a SQLite-based storage layer for the booking
//! engine, including connection management, schema versioning, and CRUD
//! operations.
//!
//! # Examples
//!
//! ```no_run
//! use lodge::database::{Database, DatabaseConfig};
//! use lodge::{Hotel, Room, RoomType};
//! use uuid::Uuid;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/lodge.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Register a hotel with one room
//! let hotel = Hotel::new("Seaview", Uuid::new_v4()).unwrap();
//! let room = Room::builder(hotel.id(), "101", RoomType::Double, 2, 120)
//!     .build()
//!     .unwrap();
//! db.register_hotel(&hotel, std::slice::from_ref(&room)).unwrap();
//!
//! // List all bookings
//! let all = Database::list_bookings(db.connection()).unwrap();
//! for booking in all {
//!     println!("{:?}", booking);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;
mod transaction;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
