//! Booking entity and its lifecycle state machine.
//!
//! A booking records one customer's stay in one room. It is created in the
//! `pending` state by the reservation coordinator and advanced through
//! approval, rejection, cancellation, and payment by the transition methods
//! here. The transitions enforce only *state* guards; role and ownership
//! checks belong to the operations layer, which holds the acting principal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stay::StayRange;

/// Lifecycle status of a booking.
///
/// `is_paid` is deliberately not part of this enum; payment is an
/// independent axis tracked as a boolean on [`Booking`].
///
/// # Examples
///
/// ```
/// use lodge::BookingStatus;
///
/// assert!(BookingStatus::Pending.is_active());
/// assert!(BookingStatus::Approved.is_active());
/// assert!(BookingStatus::Cancelled.is_terminal());
/// assert_eq!("approved".parse::<BookingStatus>().unwrap(), BookingStatus::Approved);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting a decision from the hotel owner. The initial state.
    Pending,
    /// Accepted by the hotel owner.
    Approved,
    /// Declined by the hotel owner. Terminal.
    Rejected,
    /// Withdrawn by the customer. Terminal.
    Cancelled,
}

impl BookingStatus {
    /// Returns `true` for statuses that still hold the room (pending or
    /// approved).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    /// Returns `true` for statuses that admit no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid booking status: {s}")),
        }
    }
}

/// A committed reservation of one room by one customer.
///
/// The total price is computed once at creation from the stay length and
/// the room's nightly rate; no later transition recomputes it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::{Booking, BookingStatus, StayRange};
/// use uuid::Uuid;
///
/// let stay = StayRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
/// ).unwrap();
///
/// let booking = Booking::builder(Uuid::new_v4(), Uuid::new_v4(), stay, 300)
///     .build()
///     .unwrap();
///
/// assert_eq!(booking.status(), BookingStatus::Pending);
/// assert!(!booking.is_paid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: Uuid,
    customer: Uuid,
    room: Uuid,
    stay: StayRange,
    total_price: i64,
    status: BookingStatus,
    is_paid: bool,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a builder for a new booking.
    ///
    /// Defaults: a fresh v4 id, `pending` status, unpaid, created now.
    #[must_use]
    pub fn builder(customer: Uuid, room: Uuid, stay: StayRange, total_price: i64) -> BookingBuilder {
        BookingBuilder {
            id: None,
            customer,
            room,
            stay,
            total_price,
            status: BookingStatus::Pending,
            is_paid: false,
            created_at: None,
        }
    }

    /// Returns the booking id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the id of the customer who owns this booking.
    #[must_use]
    pub const fn customer(&self) -> Uuid {
        self.customer
    }

    /// Returns the id of the booked room.
    #[must_use]
    pub const fn room(&self) -> Uuid {
        self.room
    }

    /// Returns the stay range.
    #[must_use]
    pub const fn stay(&self) -> StayRange {
        self.stay
    }

    /// Returns the total price in minor currency units.
    #[must_use]
    pub const fn total_price(&self) -> i64 {
        self.total_price
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns `true` if the booking has been paid for.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` if the booking still holds the room.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Cancels the booking (customer transition).
    ///
    /// Only a pending, unpaid booking can be cancelled; each forbidden
    /// source state produces a distinct error message.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the booking is approved, already
    /// cancelled, rejected, or paid.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        match self.status {
            BookingStatus::Approved => Err(TransitionError::new(
                "cancel",
                "cannot cancel an approved booking",
            )),
            BookingStatus::Cancelled => Err(TransitionError::new(
                "cancel",
                "booking is already cancelled",
            )),
            BookingStatus::Rejected => Err(TransitionError::new(
                "cancel",
                "cannot cancel a rejected booking",
            )),
            BookingStatus::Pending if self.is_paid => Err(TransitionError::new(
                "cancel",
                "cannot cancel a paid booking",
            )),
            BookingStatus::Pending => {
                self.status = BookingStatus::Cancelled;
                Ok(())
            }
        }
    }

    /// Approves the booking (hotel-owner transition).
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the booking is already approved or
    /// has reached a terminal state.
    pub fn approve(&mut self) -> Result<(), TransitionError> {
        match self.status {
            BookingStatus::Approved => Err(TransitionError::new(
                "approve",
                "booking is already approved",
            )),
            BookingStatus::Cancelled => Err(TransitionError::new(
                "approve",
                "cannot approve a cancelled booking",
            )),
            BookingStatus::Rejected => Err(TransitionError::new(
                "approve",
                "cannot approve a rejected booking",
            )),
            BookingStatus::Pending => {
                self.status = BookingStatus::Approved;
                Ok(())
            }
        }
    }

    /// Rejects the booking (hotel-owner transition).
    ///
    /// An approved booking may still be rejected; a cancelled one may not.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the booking is already rejected or
    /// cancelled.
    pub fn reject(&mut self) -> Result<(), TransitionError> {
        match self.status {
            BookingStatus::Rejected => Err(TransitionError::new(
                "reject",
                "booking is already rejected",
            )),
            BookingStatus::Cancelled => Err(TransitionError::new(
                "reject",
                "cannot reject a cancelled booking",
            )),
            BookingStatus::Pending | BookingStatus::Approved => {
                self.status = BookingStatus::Rejected;
                Ok(())
            }
        }
    }

    /// Marks the booking as paid (customer transition).
    ///
    /// Payment does not change the lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] if the booking is cancelled, rejected,
    /// or already paid.
    pub fn pay(&mut self) -> Result<(), TransitionError> {
        match self.status {
            BookingStatus::Cancelled => Err(TransitionError::new(
                "pay for",
                "cannot pay for a cancelled booking",
            )),
            BookingStatus::Rejected => Err(TransitionError::new(
                "pay for",
                "cannot pay for a rejected booking",
            )),
            BookingStatus::Pending | BookingStatus::Approved => {
                if self.is_paid {
                    return Err(TransitionError::new("pay for", "booking is already paid"));
                }
                self.is_paid = true;
                Ok(())
            }
        }
    }
}

/// Builder for [`Booking`] construction.
///
/// Used both for new bookings (defaults apply) and for rehydrating stored
/// rows (explicit id, status, paid flag, and timestamp).
#[derive(Debug, Clone)]
pub struct BookingBuilder {
    id: Option<Uuid>,
    customer: Uuid,
    room: Uuid,
    stay: StayRange,
    total_price: i64,
    status: BookingStatus,
    is_paid: bool,
    created_at: Option<DateTime<Utc>>,
}

impl BookingBuilder {
    /// Sets an explicit booking id.
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the paid flag.
    #[must_use]
    pub const fn is_paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the booking.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the total price is negative.
    pub fn build(self) -> Result<Booking, ValidationError> {
        if self.total_price < 0 {
            return Err(ValidationError {
                field: "totalPrice".into(),
                message: "total price must not be negative".into(),
            });
        }

        Ok(Booking {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            customer: self.customer,
            room: self.room,
            stay: self.stay,
            total_price: self.total_price,
            status: self.status,
            is_paid: self.is_paid,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

/// Error returned when a state transition is not allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    /// The transition that was attempted.
    pub action: String,
    /// Why the transition is not allowed.
    pub reason: String,
}

impl TransitionError {
    fn new(action: &str, reason: &str) -> Self {
        Self {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} booking: {}", self.action, self.reason)
    }
}

impl std::error::Error for TransitionError {}

/// Error returned when an entity fails field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
