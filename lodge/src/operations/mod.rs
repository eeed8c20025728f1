//! Booking operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for booking operations,
//! separating planning from execution to enable dry-run mode, better testing,
//! and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Analyzes the request, validates constraints, builds a plan
//! 2. **Execution**: Takes the plan and performs actual database operations
//!
//! The executor runs both phases inside one immediate-mode transaction, so
//! the state a planner validated cannot change before its actions commit.
//!
//! # Examples
//!
//! ```no_run
//! use lodge::operations::{CreateBookingOptions, CreateBookingPlan, PlanExecutor};
//! use lodge::{Database, DatabaseConfig, Principal, Role, StayRange};
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
//! let customer = Principal::new(Uuid::new_v4(), Role::Customer);
//! let stay = StayRange::new(
//!     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
//! ).unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//!
//! let options = CreateBookingOptions::new(customer, Uuid::new_v4(), stay, today);
//! let planner = CreateBookingPlan::new(options);
//!
//! let result = PlanExecutor::new(&mut db).execute(&planner).unwrap();
//! println!("booked: {:?}", result.booking);
//! ```

pub mod cancel;
pub mod create;
pub mod decide;
pub mod executor;
pub mod init;
pub mod pay;
pub mod plan;
pub mod remove;

#[cfg(test)]
mod proptests;

pub use cancel::{CancelBookingOptions, CancelBookingPlan};
pub use create::{CreateBookingOptions, CreateBookingPlan};
pub use decide::{DecideBookingOptions, DecideBookingPlan, Decision};
pub use executor::{ExecutionResult, PlanBuilder, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use pay::{PayBookingOptions, PayBookingPlan};
pub use plan::{OperationPlan, PlanAction};
pub use remove::{RemoveBookingOptions, RemoveBookingPlan};
