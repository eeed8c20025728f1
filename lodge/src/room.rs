//! Room inventory types and the availability window.
//!
//! A room advertises a single forward-looking availability interval. Every
//! successful reservation replaces that interval with "from check-out
//! onward", and a cancel or reject reopens it from today. The window is the
//! advertised interval only; booking admission additionally checks the
//! room's active bookings at query time (see [`crate::conflict`]), so the
//! lossiness of a single interval cannot double-book a room.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::ValidationError;
use crate::stay::StayRange;

/// The advertised availability interval of a room.
///
/// The interval is `[available_from, available_to)`; a missing end means
/// the room is bookable indefinitely.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::{AvailabilityWindow, StayRange};
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
///
/// let window = AvailabilityWindow::open_from(d(1));
/// let stay = StayRange::new(d(10), d(14)).unwrap();
/// assert!(window.contains(stay));
///
/// // Reserving replaces the window with "from check-out onward"
/// let after = window.reserve(stay.check_out());
/// assert_eq!(after.available_from(), d(14));
/// assert!(!after.contains(stay));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    available_from: NaiveDate,
    available_to: Option<NaiveDate>,
}

impl AvailabilityWindow {
    /// Creates a window with an explicit end.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the end is not strictly after the
    /// start.
    pub fn new(
        available_from: NaiveDate,
        available_to: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        if let Some(to) = available_to {
            if to <= available_from {
                return Err(ValidationError {
                    field: "availableTo".into(),
                    message: format!("available-to {to} must be after available-from {available_from}"),
                });
            }
        }

        Ok(Self {
            available_from,
            available_to,
        })
    }

    /// Creates an open-ended window starting at the given date.
    #[must_use]
    pub const fn open_from(available_from: NaiveDate) -> Self {
        Self {
            available_from,
            available_to: None,
        }
    }

    /// Returns the start of the window.
    #[must_use]
    pub const fn available_from(self) -> NaiveDate {
        self.available_from
    }

    /// Returns the end of the window, if bounded.
    #[must_use]
    pub const fn available_to(self) -> Option<NaiveDate> {
        self.available_to
    }

    /// Returns `true` if the window covers the whole stay.
    ///
    /// The stay must start no earlier than `available_from` and, when the
    /// window is bounded, end no later than `available_to`.
    #[must_use]
    pub fn contains(self, stay: StayRange) -> bool {
        if stay.check_in() < self.available_from {
            return false;
        }
        match self.available_to {
            Some(to) => stay.check_out() <= to,
            None => true,
        }
    }

    /// Returns the window after a stay ending at `check_out` is reserved.
    ///
    /// The room then advertises availability from the check-out day onward,
    /// open-ended. Any previous bound is discarded; this is the
    /// single-interval simplification the conflict detector compensates for.
    #[must_use]
    pub const fn reserve(self, check_out: NaiveDate) -> Self {
        Self::open_from(check_out)
    }

    /// Returns the window after a booking is cancelled or rejected.
    ///
    /// The room reopens immediately: available from `today`, open-ended.
    #[must_use]
    pub const fn reopen(self, today: NaiveDate) -> Self {
        Self::open_from(today)
    }
}

impl fmt::Display for AvailabilityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.available_to {
            Some(to) => write!(f, "{}..{to}", self.available_from),
            None => write!(f, "{}..", self.available_from),
        }
    }
}

/// The category of a room.
///
/// # Examples
///
/// ```
/// use lodge::RoomType;
///
/// assert_eq!("suite".parse::<RoomType>().unwrap(), RoomType::Suite);
/// assert_eq!(RoomType::Double.to_string(), "double");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// A single room.
    Single,
    /// A double room.
    Double,
    /// A suite.
    Suite,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
            Self::Suite => write!(f, "suite"),
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            _ => Err(format!("invalid room type: {s}")),
        }
    }
}

/// A bookable room belonging to a hotel.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::{Room, RoomType};
/// use uuid::Uuid;
///
/// let room = Room::builder(Uuid::new_v4(), "101", RoomType::Double, 2, 100)
///     .available_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(room.nightly_rate(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: Uuid,
    hotel: Uuid,
    name: String,
    room_type: RoomType,
    capacity: u8,
    nightly_rate: i64,
    window: AvailabilityWindow,
}

impl Room {
    /// Creates a builder for a new room.
    ///
    /// The window defaults to open-ended starting at the Unix epoch date;
    /// callers normally set `available_from` explicitly.
    #[must_use]
    pub fn builder(
        hotel: Uuid,
        name: &str,
        room_type: RoomType,
        capacity: u8,
        nightly_rate: i64,
    ) -> RoomBuilder {
        RoomBuilder {
            id: None,
            hotel,
            name: name.to_string(),
            room_type,
            capacity,
            nightly_rate,
            window: AvailabilityWindow::open_from(NaiveDate::default()),
        }
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the id of the hotel this room belongs to.
    #[must_use]
    pub const fn hotel(&self) -> Uuid {
        self.hotel
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the guest capacity.
    #[must_use]
    pub const fn capacity(&self) -> u8 {
        self.capacity
    }

    /// Returns the nightly rate in minor currency units.
    #[must_use]
    pub const fn nightly_rate(&self) -> i64 {
        self.nightly_rate
    }

    /// Returns the advertised availability window.
    #[must_use]
    pub const fn window(&self) -> AvailabilityWindow {
        self.window
    }

    /// Replaces the availability window.
    pub fn set_window(&mut self, window: AvailabilityWindow) {
        self.window = window;
    }
}

/// Builder for [`Room`] construction.
#[derive(Debug, Clone)]
pub struct RoomBuilder {
    id: Option<Uuid>,
    hotel: Uuid,
    name: String,
    room_type: RoomType,
    capacity: u8,
    nightly_rate: i64,
    window: AvailabilityWindow,
}

impl RoomBuilder {
    /// Sets an explicit room id.
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the start of an open-ended availability window.
    #[must_use]
    pub const fn available_from(mut self, from: NaiveDate) -> Self {
        self.window = AvailabilityWindow::open_from(from);
        self
    }

    /// Sets the full availability window.
    #[must_use]
    pub const fn window(mut self, window: AvailabilityWindow) -> Self {
        self.window = window;
        self
    }

    /// Builds the room.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty, the capacity is
    /// outside 1..=5, or the nightly rate is negative.
    pub fn build(self) -> Result<Room, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError {
                field: "roomName".into(),
                message: "room name must be non-empty".into(),
            });
        }
        if self.capacity == 0 || self.capacity > 5 {
            return Err(ValidationError {
                field: "capacity".into(),
                message: "capacity must be between 1 and 5".into(),
            });
        }
        if self.nightly_rate < 0 {
            return Err(ValidationError {
                field: "price".into(),
                message: "nightly rate must not be negative".into(),
            });
        }

        Ok(Room {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            hotel: self.hotel,
            name: self.name,
            room_type: self.room_type,
            capacity: self.capacity,
            nightly_rate: self.nightly_rate,
            window: self.window,
        })
    }
}
