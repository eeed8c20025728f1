//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use uuid::Uuid;

use crate::booking::{Booking, BookingStatus};
use crate::room::AvailabilityWindow;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Insert a new booking row.
    InsertBooking(Booking),

    /// Move an existing booking to a new status.
    SetBookingStatus {
        /// The booking to update.
        id: Uuid,
        /// The status it transitions to.
        status: BookingStatus,
    },

    /// Record payment for a booking.
    MarkBookingPaid(Uuid),

    /// Delete a booking row.
    RemoveBooking(Uuid),

    /// Replace a room's availability window.
    SetRoomWindow {
        /// The room to update.
        room: Uuid,
        /// The window it advertises afterwards.
        window: AvailabilityWindow,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertBooking(b) => {
                format!(
                    "Create booking {} for room {} ({})",
                    b.id(),
                    b.room(),
                    b.stay()
                )
            }
            Self::SetBookingStatus { id, status } => {
                format!("Set booking {id} status to {status}")
            }
            Self::MarkBookingPaid(id) => {
                format!("Mark booking {id} as paid")
            }
            Self::RemoveBooking(id) => {
                format!("Delete booking {id}")
            }
            Self::SetRoomWindow { room, window } => {
                format!("Set room {room} availability to {window}")
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book room 101");
    /// assert_eq!(plan.description, "Book room 101");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::operations::{OperationPlan, PlanAction};
    /// use lodge::{Booking, StayRange};
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let stay = StayRange::new(
    ///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
    /// ).unwrap();
    /// let booking = Booking::builder(Uuid::new_v4(), Uuid::new_v4(), stay, 300)
    ///     .build()
    ///     .unwrap();
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_action(PlanAction::InsertBooking(booking));
    ///
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_warning("This is a warning");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
