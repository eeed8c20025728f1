//! Booking cancellation planning.
//!
//! Cancellation is customer-initiated and only allowed while a booking is
//! still pending and unpaid. A successful cancel reopens the room's
//! availability window from the current date.

use chrono::NaiveDate;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::principal::{Principal, Role};

use super::executor::PlanBuilder;
use super::plan::{OperationPlan, PlanAction};

/// Options for cancelling a booking.
#[derive(Debug, Clone)]
pub struct CancelBookingOptions {
    /// The acting principal. Must be the customer who made the booking.
    pub principal: Principal,

    /// The booking to cancel.
    pub booking: Uuid,

    /// The current date; the room reopens from here.
    pub today: NaiveDate,
}

impl CancelBookingOptions {
    /// Creates options for cancelling `booking`.
    #[must_use]
    pub const fn new(principal: Principal, booking: Uuid, today: NaiveDate) -> Self {
        Self {
            principal,
            booking,
            today,
        }
    }
}

/// A cancellation plan generator.
pub struct CancelBookingPlan {
    options: CancelBookingOptions,
}

impl CancelBookingPlan {
    /// Creates a new cancellation plan with the given options.
    #[must_use]
    pub const fn new(options: CancelBookingOptions) -> Self {
        Self { options }
    }
}

impl PlanBuilder for CancelBookingPlan {
    fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;
        options.principal.require_role(Role::Customer)?;

        let mut booking =
            Database::get_booking(conn, options.booking)?.ok_or_else(|| Error::NotFound {
                resource: "Booking".into(),
            })?;
        options
            .principal
            .require_subject(booking.customer(), "cancel")?;

        // Validates the transition; the new status is written via the plan.
        booking.cancel()?;

        let room = Database::get_room(conn, booking.room())?.ok_or_else(|| Error::NotFound {
            resource: "Room".into(),
        })?;

        Ok(OperationPlan::new(format!(
            "Cancel booking {} and reopen room {}",
            booking.id(),
            room.name()
        ))
        .add_action(PlanAction::SetBookingStatus {
            id: booking.id(),
            status: booking.status(),
        })
        .add_action(PlanAction::SetRoomWindow {
            room: room.id(),
            window: room.window().reopen(options.today),
        }))
    }
}
