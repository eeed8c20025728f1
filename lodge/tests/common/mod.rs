//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the lodge library.

pub mod database;

use chrono::NaiveDate;
use uuid::Uuid;

use lodge::{Booking, BookingStatus, Principal, Role, StayRange};

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builds a calendar date, panicking on nonsense input.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture should use a valid calendar date")
}

/// Builds a stay range from two dates.
#[allow(dead_code)]
pub fn stay(check_in: NaiveDate, check_out: NaiveDate) -> StayRange {
    StayRange::new(check_in, check_out).expect("fixture should use a valid stay range")
}

/// A customer principal with a fresh subject id.
#[allow(dead_code)]
pub fn customer() -> Principal {
    Principal::new(Uuid::new_v4(), Role::Customer)
}

/// A hotel-owner principal with a fresh subject id.
#[allow(dead_code)]
pub fn hotel_owner() -> Principal {
    Principal::new(Uuid::new_v4(), Role::HotelOwner)
}

/// Builder for creating test bookings with sensible defaults.
#[allow(dead_code)]
pub struct BookingFixture {
    customer: Uuid,
    room: Uuid,
    stay: StayRange,
    total_price: i64,
    status: BookingStatus,
    is_paid: bool,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - customer: fresh id
    /// - room: fresh id
    /// - stay: 2026-02-01 to 2026-02-04
    /// - total price: 300 (three nights at 100)
    /// - status: pending, unpaid
    pub fn new() -> Self {
        Self {
            customer: Uuid::new_v4(),
            room: Uuid::new_v4(),
            stay: stay(date(2026, 2, 1), date(2026, 2, 4)),
            total_price: 300,
            status: BookingStatus::Pending,
            is_paid: false,
        }
    }

    /// Sets the booking customer.
    pub fn with_customer(mut self, customer: Uuid) -> Self {
        self.customer = customer;
        self
    }

    /// Sets the booked room.
    pub fn with_room(mut self, room: Uuid) -> Self {
        self.room = room;
        self
    }

    /// Sets the stay range.
    pub fn with_stay(mut self, stay: StayRange) -> Self {
        self.stay = stay;
        self
    }

    /// Sets the total price.
    pub fn with_total_price(mut self, total_price: i64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Sets the booking status.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the booking as paid.
    pub fn paid(mut self) -> Self {
        self.is_paid = true;
        self
    }

    /// Builds the booking.
    ///
    /// # Panics
    ///
    /// Panics if the fixture fails validation. This is acceptable in test
    /// code where we want to fail fast on invalid fixtures.
    pub fn build(self) -> Booking {
        Booking::builder(self.customer, self.room, self.stay, self.total_price)
            .status(self.status)
            .is_paid(self.is_paid)
            .build()
            .expect("fixture should build valid booking")
    }
}

impl Default for BookingFixture {
    fn default() -> Self {
        Self::new()
    }
}
