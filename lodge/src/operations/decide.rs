//! Owner decision planning (approve or reject).
//!
//! Approvals and rejections are made by the owner of the hotel the booked
//! room belongs to. Approval re-reserves the room through the approved
//! stay's check-out, so the window tracks the confirmed booking even if a
//! later stay has moved it since. Rejection releases the room by reopening
//! its availability window from the current date.

use chrono::NaiveDate;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::principal::{Principal, Role};

use super::executor::PlanBuilder;
use super::plan::{OperationPlan, PlanAction};

/// The owner's verdict on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Confirm the booking.
    Approve,
    /// Turn the booking down and release the room.
    Reject,
}

impl Decision {
    /// The verb used in descriptions and permission errors.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// Options for deciding on a booking.
#[derive(Debug, Clone)]
pub struct DecideBookingOptions {
    /// The acting principal. Must own the booking's hotel.
    pub principal: Principal,

    /// The booking being decided.
    pub booking: Uuid,

    /// The verdict.
    pub decision: Decision,

    /// The current date; a rejected booking's room reopens from here.
    pub today: NaiveDate,
}

impl DecideBookingOptions {
    /// Creates options for applying `decision` to `booking`.
    #[must_use]
    pub const fn new(
        principal: Principal,
        booking: Uuid,
        decision: Decision,
        today: NaiveDate,
    ) -> Self {
        Self {
            principal,
            booking,
            decision,
            today,
        }
    }
}

/// A decision plan generator.
pub struct DecideBookingPlan {
    options: DecideBookingOptions,
}

impl DecideBookingPlan {
    /// Creates a new decision plan with the given options.
    #[must_use]
    pub const fn new(options: DecideBookingOptions) -> Self {
        Self { options }
    }
}

impl PlanBuilder for DecideBookingPlan {
    fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;
        options.principal.require_role(Role::HotelOwner)?;

        let mut booking =
            Database::get_booking(conn, options.booking)?.ok_or_else(|| Error::NotFound {
                resource: "Booking".into(),
            })?;
        let room = Database::get_room(conn, booking.room())?.ok_or_else(|| Error::NotFound {
            resource: "Room".into(),
        })?;
        let hotel = Database::get_hotel(conn, room.hotel())?.ok_or_else(|| Error::NotFound {
            resource: "Hotel".into(),
        })?;
        options
            .principal
            .require_subject(hotel.owner(), options.decision.verb())?;

        // Validates the transition; the new status is written via the plan.
        match options.decision {
            Decision::Approve => booking.approve()?,
            Decision::Reject => booking.reject()?,
        }

        let mut plan = OperationPlan::new(format!(
            "{} booking {} for room {}",
            match options.decision {
                Decision::Approve => "Approve",
                Decision::Reject => "Reject",
            },
            booking.id(),
            room.name()
        ))
        .add_action(PlanAction::SetBookingStatus {
            id: booking.id(),
            status: booking.status(),
        });

        let window = match options.decision {
            Decision::Approve => room.window().reserve(booking.stay().check_out()),
            Decision::Reject => room.window().reopen(options.today),
        };
        plan = plan.add_action(PlanAction::SetRoomWindow {
            room: room.id(),
            window,
        });

        Ok(plan)
    }
}
