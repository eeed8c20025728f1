//! Integration tests for the database layer.
//!
//! These tests exercise the full database stack including auto-initialization,
//! schema versioning, persistence across reopens, and transaction atomicity.

mod common;

use tempfile::tempdir;
use uuid::Uuid;

use common::{date, stay, BookingFixture};

use lodge::database::migrations::get_schema_version;
use lodge::database::{Database, DatabaseConfig};
use lodge::{BookingStatus, Hotel, Room, RoomType};

fn sample_room(hotel: Uuid) -> Room {
    Room::builder(hotel, "101", RoomType::Double, 2, 100)
        .available_from(date(2026, 1, 1))
        .build()
        .unwrap()
}

#[test]
fn test_database_auto_creation() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("subdir").join("test.db");

    // Directory doesn't exist yet
    assert!(!db_path.parent().unwrap().exists());

    // Open with auto-create
    let config = DatabaseConfig::new(&db_path);
    let _db = Database::open(config).unwrap();

    // Directory and file should now exist
    assert!(db_path.exists());
    assert!(db_path.parent().unwrap().exists());
}

#[test]
fn test_schema_initialized_on_first_open() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert_eq!(get_schema_version(db.connection()).unwrap(), 1);
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let owner = Uuid::new_v4();
    let hotel = Hotel::new("Persistence Hotel", owner).unwrap();
    let room = sample_room(hotel.id());
    let booking = BookingFixture::new()
        .with_room(room.id())
        .with_stay(stay(date(2026, 2, 1), date(2026, 2, 4)))
        .build();

    {
        let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        db.register_hotel(&hotel, std::slice::from_ref(&room)).unwrap();
        Database::insert_booking(db.connection(), &booking).unwrap();
    }

    // Reopen and read everything back.
    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let stored_hotel = Database::get_hotel(db.connection(), hotel.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored_hotel.name(), "Persistence Hotel");
    assert_eq!(stored_hotel.owner(), owner);

    let stored_room = Database::get_room(db.connection(), room.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored_room.hotel(), hotel.id());
    assert_eq!(stored_room.nightly_rate(), 100);
    assert_eq!(stored_room.window().available_from(), date(2026, 1, 1));

    let stored_booking = Database::get_booking(db.connection(), booking.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored_booking.customer(), booking.customer());
    assert_eq!(stored_booking.stay(), booking.stay());
    assert_eq!(stored_booking.status(), BookingStatus::Pending);
    assert_eq!(stored_booking.created_at(), booking.created_at());
}

#[test]
fn test_register_hotel_is_atomic() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let owner = Uuid::new_v4();
    let first = Hotel::new("Twin Hotel", owner).unwrap();
    db.register_hotel(&first, &[sample_room(first.id())]).unwrap();

    // A second hotel with the same name violates the unique constraint;
    // none of its rooms may survive.
    let duplicate = Hotel::new("Twin Hotel", owner).unwrap();
    let orphan = sample_room(duplicate.id());
    assert!(db.register_hotel(&duplicate, &[orphan.clone()]).is_err());

    assert!(Database::get_room(db.connection(), orphan.id())
        .unwrap()
        .is_none());
    assert_eq!(Database::list_hotels(db.connection()).unwrap().len(), 1);
}

#[test]
fn test_room_listing_by_hotel() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let owner = Uuid::new_v4();
    let hotel_a = Hotel::new("Hotel A", owner).unwrap();
    let hotel_b = Hotel::new("Hotel B", owner).unwrap();
    db.register_hotel(
        &hotel_a,
        &[sample_room(hotel_a.id()), sample_room(hotel_a.id())],
    )
    .unwrap();
    db.register_hotel(&hotel_b, &[sample_room(hotel_b.id())]).unwrap();

    assert_eq!(
        Database::list_rooms(db.connection(), Some(hotel_a.id()))
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        Database::list_rooms(db.connection(), Some(hotel_b.id()))
            .unwrap()
            .len(),
        1
    );
    assert_eq!(Database::list_rooms(db.connection(), None).unwrap().len(), 3);
}

#[test]
fn test_bookings_by_owner_spans_hotels() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let owner = Uuid::new_v4();
    let other_owner = Uuid::new_v4();

    let mine = Hotel::new("Mine", owner).unwrap();
    let my_room = sample_room(mine.id());
    db.register_hotel(&mine, std::slice::from_ref(&my_room)).unwrap();

    let theirs = Hotel::new("Theirs", other_owner).unwrap();
    let their_room = sample_room(theirs.id());
    db.register_hotel(&theirs, std::slice::from_ref(&their_room)).unwrap();

    let on_mine = BookingFixture::new().with_room(my_room.id()).build();
    let on_theirs = BookingFixture::new().with_room(their_room.id()).build();
    Database::insert_booking(db.connection(), &on_mine).unwrap();
    Database::insert_booking(db.connection(), &on_theirs).unwrap();

    let owner_bookings = Database::bookings_by_owner(db.connection(), owner).unwrap();
    assert_eq!(owner_bookings.len(), 1);
    assert_eq!(owner_bookings[0].id(), on_mine.id());
}

#[test]
fn test_active_bookings_exclude_terminal_states() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let hotel = Hotel::new("Filter Hotel", Uuid::new_v4()).unwrap();
    let room = sample_room(hotel.id());
    db.register_hotel(&hotel, std::slice::from_ref(&room)).unwrap();

    let pending = BookingFixture::new().with_room(room.id()).build();
    let approved = BookingFixture::new()
        .with_room(room.id())
        .with_status(BookingStatus::Approved)
        .build();
    let cancelled = BookingFixture::new()
        .with_room(room.id())
        .with_status(BookingStatus::Cancelled)
        .build();
    let rejected = BookingFixture::new()
        .with_room(room.id())
        .with_status(BookingStatus::Rejected)
        .build();

    for booking in [&pending, &approved, &cancelled, &rejected] {
        Database::insert_booking(db.connection(), booking).unwrap();
    }

    let active = Database::active_bookings_by_room(db.connection(), room.id()).unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(lodge::Booking::is_active));
}

#[test]
fn test_update_room_window_persists() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let hotel = Hotel::new("Window Hotel", Uuid::new_v4()).unwrap();
    let room = sample_room(hotel.id());
    db.register_hotel(&hotel, std::slice::from_ref(&room)).unwrap();

    let moved = room.window().reserve(date(2026, 2, 4));
    assert!(Database::update_room_window(db.connection(), room.id(), moved).unwrap());

    drop(db);
    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    let stored = Database::get_room(db.connection(), room.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored.window().available_from(), date(2026, 2, 4));
    assert_eq!(stored.window().available_to(), None);
}
