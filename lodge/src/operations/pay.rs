//! Payment recording.
//!
//! Payment is customer-initiated, idempotently rejected when already paid,
//! and blocked for cancelled or rejected bookings. It never changes the
//! booking's status; a pending booking stays pending until the owner
//! decides on it.

use rusqlite::Connection;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::principal::{Principal, Role};

use super::executor::PlanBuilder;
use super::plan::{OperationPlan, PlanAction};

/// Options for paying for a booking.
#[derive(Debug, Clone)]
pub struct PayBookingOptions {
    /// The acting principal. Must be the customer who made the booking.
    pub principal: Principal,

    /// The booking to pay for.
    pub booking: Uuid,
}

impl PayBookingOptions {
    /// Creates options for paying for `booking`.
    #[must_use]
    pub const fn new(principal: Principal, booking: Uuid) -> Self {
        Self { principal, booking }
    }
}

/// A payment plan generator.
pub struct PayBookingPlan {
    options: PayBookingOptions,
}

impl PayBookingPlan {
    /// Creates a new payment plan with the given options.
    #[must_use]
    pub const fn new(options: PayBookingOptions) -> Self {
        Self { options }
    }
}

impl PlanBuilder for PayBookingPlan {
    fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;
        options.principal.require_role(Role::Customer)?;

        let mut booking =
            Database::get_booking(conn, options.booking)?.ok_or_else(|| Error::NotFound {
                resource: "Booking".into(),
            })?;
        options
            .principal
            .require_subject(booking.customer(), "pay for")?;

        // Validates the transition; the paid flag is written via the plan.
        booking.pay()?;

        Ok(OperationPlan::new(format!(
            "Record payment of {} for booking {}",
            booking.total_price(),
            booking.id()
        ))
        .add_action(PlanAction::MarkBookingPaid(booking.id())))
    }
}
