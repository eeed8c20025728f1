//! Booking creation planning.
//!
//! This module implements the admission logic for new bookings: role and
//! date validation, conflict detection against the customer's history and
//! the room's own calendar, pricing, and the window update that reserves
//! the room.

use chrono::NaiveDate;
use rusqlite::Connection;
use uuid::Uuid;

use crate::booking::Booking;
use crate::conflict::ConflictCheck;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::principal::{Principal, Role};
use crate::stay::StayRange;

use super::executor::PlanBuilder;
use super::plan::{OperationPlan, PlanAction};

/// Options for creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingOptions {
    /// The acting principal. Must be a customer.
    pub principal: Principal,

    /// The room to book.
    pub room: Uuid,

    /// The requested stay.
    pub stay: StayRange,

    /// The current date, used to reject past check-ins and injected so
    /// planning stays deterministic under test.
    pub today: NaiveDate,
}

impl CreateBookingOptions {
    /// Creates options for booking `room` over `stay`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::operations::CreateBookingOptions;
    /// use lodge::{Principal, Role, StayRange};
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let customer = Principal::new(Uuid::new_v4(), Role::Customer);
    /// let stay = StayRange::new(
    ///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
    /// ).unwrap();
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    ///
    /// let options = CreateBookingOptions::new(customer, Uuid::new_v4(), stay, today);
    /// assert_eq!(options.stay, stay);
    /// ```
    #[must_use]
    pub const fn new(principal: Principal, room: Uuid, stay: StayRange, today: NaiveDate) -> Self {
        Self {
            principal,
            room,
            stay,
            today,
        }
    }
}

/// A booking creation plan generator.
///
/// This struct is responsible for analyzing a booking request and
/// generating a plan that describes what actions to take.
pub struct CreateBookingPlan {
    options: CreateBookingOptions,
}

impl CreateBookingPlan {
    /// Creates a new booking plan with the given options.
    #[must_use]
    pub const fn new(options: CreateBookingOptions) -> Self {
        Self { options }
    }
}

impl PlanBuilder for CreateBookingPlan {
    fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;
        options.principal.require_role(Role::Customer)?;

        if options.stay.check_in() < options.today {
            return Err(Error::Validation {
                field: "checkInDate".into(),
                message: "check-in date cannot be in the past".into(),
            });
        }

        let room = Database::get_room(conn, options.room)?.ok_or_else(|| Error::NotFound {
            resource: "Room".into(),
        })?;
        // The room's hotel must still exist; inventory is never deleted
        // out from under rooms, but a missing hotel should not price a stay.
        Database::get_hotel(conn, room.hotel())?.ok_or_else(|| Error::NotFound {
            resource: "Hotel".into(),
        })?;

        let customer = options.principal.subject;
        let customer_bookings = Database::bookings_by_customer(conn, customer)?;
        let hotel_room_ids = Database::room_ids_by_hotel(conn, room.hotel())?;
        let room_bookings = Database::active_bookings_by_room(conn, room.id())?;

        ConflictCheck {
            stay: options.stay,
            room: &room,
            customer_bookings: &customer_bookings,
            hotel_room_ids: &hotel_room_ids,
            room_bookings: &room_bookings,
        }
        .evaluate()?;

        let total_price = options.stay.total_price(room.nightly_rate());
        let booking = Booking::builder(customer, room.id(), options.stay, total_price).build()?;

        let reserved = room.window().reserve(options.stay.check_out());

        Ok(OperationPlan::new(format!(
            "Book room {} for {} ({} night(s), {} total)",
            room.name(),
            options.stay,
            options.stay.nights(),
            total_price
        ))
        .add_action(PlanAction::InsertBooking(booking))
        .add_action(PlanAction::SetRoomWindow {
            room: room.id(),
            window: reserved,
        }))
    }
}
