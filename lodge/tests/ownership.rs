//! Role and ownership enforcement tests.
//!
//! Every mutating operation checks both the caller's role and, where the
//! operation is exclusive, that the caller owns the booking or the hotel.

mod common;

use common::database::{book, create_test_database, seed_hotel};
use common::{customer, date, hotel_owner, stay};

use lodge::database::Database;
use lodge::operations::{
    CancelBookingOptions, CancelBookingPlan, DecideBookingOptions, DecideBookingPlan, Decision,
    PayBookingOptions, PayBookingPlan, PlanExecutor, RemoveBookingOptions, RemoveBookingPlan,
};
use lodge::BookingStatus;

#[test]
fn test_only_booking_customer_can_cancel() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    let stranger = customer();
    let options = CancelBookingOptions::new(stranger, booking.id(), today);
    let err = PlanExecutor::new(&mut db)
        .execute(&CancelBookingPlan::new(options))
        .unwrap_err();
    assert!(err.is_forbidden());

    let stored = Database::get_booking(db.connection(), booking.id())
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), BookingStatus::Pending);
}

#[test]
fn test_only_booking_customer_can_pay() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    let stranger = customer();
    let options = PayBookingOptions::new(stranger, booking.id());
    let err = PlanExecutor::new(&mut db)
        .execute(&PayBookingPlan::new(options))
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[test]
fn test_customer_cannot_decide() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    let options = DecideBookingOptions::new(guest, booking.id(), Decision::Approve, today);
    let err = PlanExecutor::new(&mut db)
        .execute(&DecideBookingPlan::new(options))
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[test]
fn test_other_owner_cannot_decide() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    // An owner of a different hotel holds the right role but not this hotel.
    let rival = hotel_owner();
    let options = DecideBookingOptions::new(rival, booking.id(), Decision::Approve, today);
    let err = PlanExecutor::new(&mut db)
        .execute(&DecideBookingPlan::new(options))
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[test]
fn test_other_customer_cannot_delete() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    let stranger = customer();
    let options = RemoveBookingOptions::new(stranger, booking.id());
    let err = PlanExecutor::new(&mut db)
        .execute(&RemoveBookingPlan::new(options))
        .unwrap_err();
    assert!(err.is_forbidden());

    assert!(Database::get_booking(db.connection(), booking.id())
        .unwrap()
        .is_some());
}

#[test]
fn test_hotel_owner_cannot_delete() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    // Deletion belongs to the booking's customer; even the hotel's own
    // owner cannot remove the row.
    let options = RemoveBookingOptions::new(owner, booking.id());
    let err = PlanExecutor::new(&mut db)
        .execute(&RemoveBookingPlan::new(options))
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[test]
fn test_booking_customer_can_delete_in_any_status() {
    let mut db = create_test_database();
    let owner = hotel_owner();
    let (_hotel, rooms) = seed_hotel(&mut db, owner.subject, 1);
    let guest = customer();
    let today = date(2026, 1, 15);

    let booking = book(
        &mut db,
        guest,
        rooms[0].id(),
        stay(date(2026, 2, 1), date(2026, 2, 4)),
        today,
    )
    .unwrap();

    // Approve first: deletion stays open to the customer even after the
    // owner has confirmed the stay.
    let approve = DecideBookingOptions::new(owner, booking.id(), Decision::Approve, today);
    PlanExecutor::new(&mut db)
        .execute(&DecideBookingPlan::new(approve))
        .unwrap();

    let options = RemoveBookingOptions::new(guest, booking.id());
    let result = PlanExecutor::new(&mut db)
        .execute(&RemoveBookingPlan::new(options))
        .unwrap();
    assert!(result.success);

    assert!(Database::get_booking(db.connection(), booking.id())
        .unwrap()
        .is_none());
}
