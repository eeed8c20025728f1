//! Output formatting module for booking listings.
//!
//! This module provides various output formats for displaying bookings,
//! including a human-readable table, JSON, and CSV.

mod formatters;

use crate::config::OutputFormat;
use crate::{Booking, Result};

pub use formatters::{BookingRow, CsvFormatter, JsonFormatter, TableFormatter};

/// Trait for formatting bookings into different output formats.
pub trait OutputFormatter {
    /// Format the given bookings into a string.
    ///
    /// # Arguments
    ///
    /// * `bookings` - The bookings to render, in the order they should appear
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, bookings: &[Booking]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
            Self::Table => Box::new(TableFormatter),
        }
    }
}
