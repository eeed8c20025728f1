//! Shared database test utilities.

use chrono::NaiveDate;
use uuid::Uuid;

use lodge::database::{Database, DatabaseConfig};
use lodge::operations::{CreateBookingOptions, CreateBookingPlan, PlanExecutor};
use lodge::{Booking, Hotel, Principal, Result, Room, RoomType, StayRange};

use super::date;

/// Creates a temporary test database that will be cleaned up when dropped.
///
/// Returns the database instance. The temporary directory is tied to the
/// database's lifetime through the test.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Registers a hotel with `room_count` double rooms available from
/// 2026-01-01, and returns the hotel and its rooms.
#[allow(dead_code)]
pub fn seed_hotel(db: &mut Database, owner: Uuid, room_count: usize) -> (Hotel, Vec<Room>) {
    seed_hotel_from(db, owner, room_count, date(2026, 1, 1))
}

/// Registers a hotel whose rooms open at the given date.
#[allow(dead_code)]
pub fn seed_hotel_from(
    db: &mut Database,
    owner: Uuid,
    room_count: usize,
    available_from: NaiveDate,
) -> (Hotel, Vec<Room>) {
    // Hotel names are unique, so derive one from the owner id.
    let hotel = Hotel::new(&format!("Hotel {owner}"), owner).unwrap();
    let rooms: Vec<Room> = (0..room_count)
        .map(|index| {
            Room::builder(hotel.id(), &format!("{}", 101 + index), RoomType::Double, 2, 100)
                .available_from(available_from)
                .build()
                .unwrap()
        })
        .collect();

    db.register_hotel(&hotel, &rooms).unwrap();
    (hotel, rooms)
}

/// Plans and executes a booking for the given customer, room, and stay.
#[allow(dead_code)]
pub fn book(
    db: &mut Database,
    customer: Principal,
    room: Uuid,
    stay: StayRange,
    today: NaiveDate,
) -> Result<Booking> {
    let options = CreateBookingOptions::new(customer, room, stay, today);
    let planner = CreateBookingPlan::new(options);
    let result = PlanExecutor::new(db).execute(&planner)?;
    Ok(result
        .booking
        .expect("a successful create should produce a booking"))
}
