//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use chrono::NaiveDate;
use tempfile::tempdir;
use uuid::Uuid;

use crate::booking::Booking;
use crate::database::{Database, DatabaseConfig};
use crate::hotel::Hotel;
use crate::room::{Room, RoomType};
use crate::stay::StayRange;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Builds a calendar date, panicking on invalid input.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a stay range, panicking on invalid input.
#[must_use]
pub fn stay(check_in: NaiveDate, check_out: NaiveDate) -> StayRange {
    StayRange::new(check_in, check_out).unwrap()
}

/// Creates a test hotel with a unique name and a fresh owner.
///
/// Hotel names carry a UNIQUE constraint, so each call generates its own.
///
/// # Panics
///
/// Panics if the hotel cannot be created.
#[must_use]
pub fn create_test_hotel() -> Hotel {
    let owner = Uuid::new_v4();
    Hotel::new(&format!("Hotel {owner}"), owner).unwrap()
}

/// Creates a single-room fixture for the given hotel, available from `from`
/// with no end date.
///
/// # Panics
///
/// Panics if the room cannot be created.
#[must_use]
pub fn create_test_room(hotel: Uuid, from: NaiveDate) -> Room {
    Room::builder(hotel, "101", RoomType::Double, 2, 100)
        .available_from(from)
        .build()
        .unwrap()
}

/// Creates a pending, unpaid test booking priced at the fixture room's rate.
///
/// # Panics
///
/// Panics if the booking cannot be created.
#[must_use]
pub fn create_test_booking(customer: Uuid, room: Uuid, stay: StayRange) -> Booking {
    Booking::builder(customer, room, stay, stay.total_price(100))
        .build()
        .unwrap()
}
