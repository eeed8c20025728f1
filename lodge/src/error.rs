//! Error types for the lodge library.
//!
//! This module provides a comprehensive error hierarchy for all booking
//! operations in the lodge library, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a lodge error.
///
/// # Examples
///
/// ```
/// use lodge::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(300)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lodge library.
///
/// This enum encompasses all possible error conditions that can occur
/// during booking operations. Each variant maps to one entry of the
/// user-facing error taxonomy exposed through [`Error::title`].
#[derive(Debug, Error)]
pub enum Error {
    /// A request field was missing or malformed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The acting principal lacks the role or ownership required.
    #[error("forbidden: {details}")]
    Forbidden {
        /// Details about the denied action.
        details: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The room's availability window does not cover the requested stay.
    #[error("room unavailable: {details}")]
    RoomUnavailable {
        /// Details about the availability violation.
        details: String,
    },

    /// The requested stay conflicts with an existing booking.
    #[error("booking conflict: {details}")]
    BookingConflict {
        /// Details about the conflict.
        details: String,
    },

    /// A booking state transition is not allowed from the current status.
    #[error("cannot {action} booking: {reason}")]
    InvalidTransition {
        /// The transition that was attempted.
        action: String,
        /// Why the transition is not allowed.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::stay::InvalidStayError> for Error {
    fn from(err: crate::stay::InvalidStayError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::booking::TransitionError> for Error {
    fn from(err: crate::booking::TransitionError) -> Self {
        Self::InvalidTransition {
            action: err.action,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Returns the stable user-facing title for this error.
    ///
    /// Every rejected operation surfaces a `{title, message}` pair; the
    /// title identifies the taxonomy bucket while `Display` supplies the
    /// message.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::NotFound { resource: "room 42".to_string() };
    /// assert_eq!(err.title(), "Not Found");
    /// ```
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Bad Request",
            Self::Forbidden { .. } => "Forbidden",
            Self::NotFound { .. } => "Not Found",
            Self::RoomUnavailable { .. }
            | Self::BookingConflict { .. }
            | Self::InvalidTransition { .. } => "Conflict",
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::DataDirectoryNotFound { .. }
            | Self::DatabaseCorruption { .. }
            | Self::UnsupportedSchemaVersion { .. } => "Internal Server Error",
        }
    }

    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::NotFound { resource: "booking".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a role or ownership rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::Forbidden { details: "not your booking".to_string() };
    /// assert!(err.is_forbidden());
    /// ```
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    /// Check if error is a reservation conflict of any kind.
    ///
    /// Covers availability violations, overlapping stays, and duplicate
    /// state transitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Error;
    ///
    /// let err = Error::BookingConflict { details: "overlapping stay".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RoomUnavailable { .. }
                | Self::BookingConflict { .. }
                | Self::InvalidTransition { .. }
        )
    }

    /// Check if error is a database lock timeout.
    ///
    /// `SQLite` reports this as `SQLITE_BUSY` once the busy timeout has
    /// elapsed without the writer lock becoming available.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
        )
    }
}
