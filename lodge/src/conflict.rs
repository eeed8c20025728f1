//! Conflict detection for booking admission.
//!
//! Given a candidate stay and the store reads the coordinator already
//! performed, [`ConflictCheck`] decides whether a new reservation is
//! permitted. The rules run in a fixed order and each produces its own
//! error, so callers surface the first violation.
//!
//! Rule 4 intentionally diverges from the system this replaces, whose
//! payment/status gate (`approved && !paid` together with `pending &&
//! paid`) could never match a booking: here any overlapping booking that
//! has not been cancelled or rejected conflicts, independent of payment.
//! Rule 5 goes beyond the advertised availability window and checks the
//! target room's own active bookings at query time, so a window reopened
//! by a cancel cannot re-sell dates an approved stay still holds.

use std::collections::HashSet;

use uuid::Uuid;

use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::room::Room;
use crate::stay::StayRange;

/// Inputs to a single booking admission decision.
///
/// All fields are plain reads; evaluation is pure. The coordinator gathers
/// them inside the same transaction that will perform the writes, which is
/// what makes check-then-reserve atomic.
#[derive(Debug)]
pub struct ConflictCheck<'a> {
    /// The candidate stay.
    pub stay: StayRange,
    /// The room being booked.
    pub room: &'a Room,
    /// Every booking the customer holds, any room, any status.
    pub customer_bookings: &'a [Booking],
    /// Ids of all rooms in the target room's hotel.
    pub hotel_room_ids: &'a HashSet<Uuid>,
    /// Active (pending or approved) bookings on the target room, any
    /// customer.
    pub room_bookings: &'a [Booking],
}

impl ConflictCheck<'_> {
    /// Evaluates the admission rules in order.
    ///
    /// # Errors
    ///
    /// - [`Error::RoomUnavailable`] if the room's availability window does
    ///   not cover the stay.
    /// - [`Error::BookingConflict`] if the customer already booked this
    ///   room, holds an active booking elsewhere in the same hotel, holds
    ///   an overlapping active booking anywhere, or the room itself has an
    ///   overlapping active booking.
    pub fn evaluate(&self) -> Result<()> {
        // Rule 1: advertised availability window must cover the stay.
        if !self.room.window().contains(self.stay) {
            return Err(Error::RoomUnavailable {
                details: format!(
                    "room is not available throughout the booking period (available {})",
                    self.room.window()
                ),
            });
        }

        // Rule 2: one booking per room per customer, any status.
        if self
            .customer_bookings
            .iter()
            .any(|b| b.room() == self.room.id())
        {
            return Err(Error::BookingConflict {
                details: "you already have a booking for this room".into(),
            });
        }

        // Rule 3: one active stay per hotel per customer.
        if self.customer_bookings.iter().any(|b| {
            b.is_active() && b.room() != self.room.id() && self.hotel_room_ids.contains(&b.room())
        }) {
            return Err(Error::BookingConflict {
                details: "you already have an active booking in this hotel".into(),
            });
        }

        // Rule 4: no overlapping active booking for the customer anywhere.
        if self
            .customer_bookings
            .iter()
            .any(|b| b.is_active() && b.stay().overlaps(self.stay))
        {
            return Err(Error::BookingConflict {
                details: "you already have a booking during this period".into(),
            });
        }

        // Rule 5: no overlapping active booking on the room itself.
        if self
            .room_bookings
            .iter()
            .any(|b| b.is_active() && b.stay().overlaps(self.stay))
        {
            return Err(Error::BookingConflict {
                details: "the room is already booked during this period".into(),
            });
        }

        Ok(())
    }
}
