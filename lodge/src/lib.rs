#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lodge
//!
//! A library for managing hotel room bookings.
//!
//! This library provides core types and functionality for listing hotels
//! and rooms, placing and deciding bookings, and tracking room
//! availability across overlapping stays.
//!
//! ## Core Types
//!
//! - [`Hotel`], [`Room`], and [`AvailabilityWindow`]: the rentable inventory
//! - [`Booking`] and [`BookingStatus`]: the booking lifecycle
//! - [`StayRange`]: half-open date ranges with overlap and pricing rules
//! - [`Principal`] and [`Role`]: who is acting, and as what
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lodge::StayRange;
//!
//! let stay = StayRange::new(
//!     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
//! ).unwrap();
//!
//! assert_eq!(stay.nights(), 3);
//! assert_eq!(stay.total_price(100), 300);
//! ```

pub mod booking;
pub mod config;
pub mod conflict;
pub mod database;
pub mod error;
pub mod hotel;
pub mod logging;
pub mod operations;
pub mod output;
pub mod principal;
pub mod room;
pub mod stay;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingBuilder, BookingStatus};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use conflict::ConflictCheck;
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use hotel::Hotel;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    CancelBookingOptions, CreateBookingOptions, DecideBookingOptions, Decision, ExecutionResult,
    OperationPlan, PayBookingOptions, PlanAction, PlanBuilder, PlanExecutor, RemoveBookingOptions,
};
pub use principal::{Principal, Role};
pub use room::{AvailabilityWindow, Room, RoomType};
pub use stay::StayRange;
