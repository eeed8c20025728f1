//! Booking deletion planning.
//!
//! Deletion belongs to the customer who made the booking, and it is
//! permitted in any status, including approved and paid stays. The room's
//! availability window is left untouched; deleting an active booking only
//! surfaces a warning, and the dates come back on sale when the owner
//! rejects or the customer cancels instead.

use rusqlite::Connection;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::principal::{Principal, Role};

use super::executor::PlanBuilder;
use super::plan::{OperationPlan, PlanAction};

/// Options for deleting a booking.
#[derive(Debug, Clone)]
pub struct RemoveBookingOptions {
    /// The acting principal. Must be the customer who made the booking.
    pub principal: Principal,

    /// The booking to delete.
    pub booking: Uuid,
}

impl RemoveBookingOptions {
    /// Creates options for deleting `booking`.
    #[must_use]
    pub const fn new(principal: Principal, booking: Uuid) -> Self {
        Self { principal, booking }
    }
}

/// A deletion plan generator.
pub struct RemoveBookingPlan {
    options: RemoveBookingOptions,
}

impl RemoveBookingPlan {
    /// Creates a new deletion plan with the given options.
    #[must_use]
    pub const fn new(options: RemoveBookingOptions) -> Self {
        Self { options }
    }
}

impl PlanBuilder for RemoveBookingPlan {
    fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;
        options.principal.require_role(Role::Customer)?;

        let booking =
            Database::get_booking(conn, options.booking)?.ok_or_else(|| Error::NotFound {
                resource: "Booking".into(),
            })?;
        options
            .principal
            .require_subject(booking.customer(), "delete")?;

        let mut plan = OperationPlan::new(format!("Delete booking {}", booking.id()))
            .add_action(PlanAction::RemoveBooking(booking.id()));

        if booking.is_active() {
            plan = plan.add_warning(format!(
                "booking {} was still {}; the room's availability window is unchanged",
                booking.id(),
                booking.status()
            ));
        }

        Ok(plan)
    }
}
