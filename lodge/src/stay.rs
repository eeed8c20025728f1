//! Stay range types for date-based reservations.
//!
//! This module provides the half-open date interval a booking covers,
//! including validation, the canonical overlap test, and pricing.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A half-open date interval `[check_in, check_out)` describing a stay.
///
/// The check-out day is the day the room is vacated, so a stay from
/// 2024-01-01 to 2024-01-04 covers three nights. Construction validates
/// that check-in is strictly before check-out; same-day stays are invalid.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lodge::StayRange;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
///
/// let stay = StayRange::new(check_in, check_out).unwrap();
/// assert_eq!(stay.nights(), 3);
///
/// // Same-day stays are rejected
/// assert!(StayRange::new(check_in, check_in).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Creates a new stay range.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` is not strictly after `check_in`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lodge::StayRange;
    ///
    /// let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    ///
    /// assert!(StayRange::new(jan1, jan2).is_ok());
    /// assert!(StayRange::new(jan2, jan1).is_err());
    /// ```
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, InvalidStayError> {
        if check_out <= check_in {
            return Err(InvalidStayError {
                field: "checkOutDate".into(),
                message: format!("check-out {check_out} must be after check-in {check_in}"),
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights in this stay.
    ///
    /// Always at least 1, by construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lodge::StayRange;
    ///
    /// let stay = StayRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
    /// ).unwrap();
    /// assert_eq!(stay.nights(), 1);
    /// ```
    #[must_use]
    pub fn nights(self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns `true` if this stay overlaps another.
    ///
    /// Two half-open ranges `[a1, a2)` and `[b1, b2)` overlap iff
    /// `a1 < b2 && b1 < a2`. Back-to-back stays (one checking out the day
    /// the other checks in) do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lodge::StayRange;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
    ///
    /// let first = StayRange::new(d(1), d(5)).unwrap();
    /// let second = StayRange::new(d(4), d(8)).unwrap();
    /// let third = StayRange::new(d(5), d(9)).unwrap();
    ///
    /// assert!(first.overlaps(second));
    /// assert!(!first.overlaps(third)); // back-to-back
    /// ```
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Computes the total price for this stay at the given nightly rate.
    ///
    /// Rates and totals are in minor currency units; the total is simply
    /// `nights * nightly_rate` and is computed once at booking creation.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lodge::StayRange;
    ///
    /// let stay = StayRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
    /// ).unwrap();
    ///
    /// // Three nights at 100 per night
    /// assert_eq!(stay.total_price(100), 300);
    /// ```
    #[must_use]
    pub fn total_price(self, nightly_rate: i64) -> i64 {
        self.nights() * nightly_rate
    }
}

impl fmt::Display for StayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}

/// Error returned when a stay range fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStayError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for InvalidStayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid stay ({}): {}", self.field, self.message)
    }
}

impl std::error::Error for InvalidStayError {}
