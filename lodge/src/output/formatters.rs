//! Output formatter implementations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{Booking, BookingStatus, Error, Result};

use super::OutputFormatter;

/// A flat, serializable view of a booking.
///
/// JSON and CSV output share this shape so that scripted consumers see
/// the same field names regardless of format.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRow {
    /// Booking id.
    pub id: Uuid,
    /// Customer id.
    pub customer: Uuid,
    /// Room id.
    pub room: Uuid,
    /// First night of the stay.
    pub check_in: String,
    /// Checkout morning (exclusive).
    pub check_out: String,
    /// Number of nights.
    pub nights: i64,
    /// Total price in minor currency units.
    pub total_price: i64,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Whether the booking has been paid for.
    pub is_paid: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id(),
            customer: booking.customer(),
            room: booking.room(),
            check_in: booking.stay().check_in().to_string(),
            check_out: booking.stay().check_out().to_string(),
            nights: booking.stay().nights(),
            total_price: booking.total_price(),
            status: booking.status(),
            is_paid: booking.is_paid(),
            created_at: booking.created_at(),
        }
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, bookings: &[Booking]) -> Result<String> {
        let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();

        serde_json::to_string_pretty(&rows).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for CSV output.
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format(&self, bookings: &[Booking]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for booking in bookings {
            writer
                .serialize(BookingRow::from(booking))
                .map_err(|e| Error::Validation {
                    field: "csv_output".to_string(),
                    message: format!("failed to serialize to CSV: {e}"),
                })?;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("failed to flush CSV output: {e}"),
        })?;

        String::from_utf8(bytes).map_err(|e| Error::Validation {
            field: "csv_output".to_string(),
            message: format!("CSV output was not valid UTF-8: {e}"),
        })
    }
}

/// Formatter for human-readable table output.
pub struct TableFormatter;

impl TableFormatter {
    const HEADERS: [&'static str; 6] = ["ID", "STAY", "NIGHTS", "TOTAL", "STATUS", "PAID"];
}

impl OutputFormatter for TableFormatter {
    fn format(&self, bookings: &[Booking]) -> Result<String> {
        if bookings.is_empty() {
            return Ok("No bookings found.".to_string());
        }

        let rows: Vec<[String; 6]> = bookings
            .iter()
            .map(|b| {
                [
                    b.id().to_string(),
                    b.stay().to_string(),
                    b.stay().nights().to_string(),
                    b.total_price().to_string(),
                    b.status().to_string(),
                    if b.is_paid() { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();

        // Column widths start at the header widths and grow to fit the rows.
        let mut widths: Vec<usize> = Self::HEADERS.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let render = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let header: Vec<String> = Self::HEADERS.iter().map(ToString::to_string).collect();
        let mut lines = vec![render(&header)];
        for row in &rows {
            lines.push(render(row));
        }

        Ok(lines.join("\n"))
    }
}
