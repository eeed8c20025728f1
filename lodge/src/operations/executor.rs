//! Plan execution engine.
//!
//! This module implements the executor that builds operation plans inside
//! a write transaction and applies them to the database.
//!
//! Planning happens inside the same immediate-mode transaction that applies
//! the actions. The reads a planner performs (room lookup, conflict checks)
//! therefore see a state no concurrent writer can change before the plan
//! commits, which is what makes check-then-reserve atomic: of two clients
//! racing for the same room, exactly one commits and the other replans
//! against the winner's writes.

use rusqlite::Connection;

use crate::booking::Booking;
use crate::database::Database;
use crate::error::{Error, Result};

use super::plan::{OperationPlan, PlanAction};

/// A planner that turns a request into an [`OperationPlan`].
///
/// Implementations perform all reads and validation against the connection
/// they are given. The executor calls `build_plan` with a transaction, so a
/// planner must not assume it sees committed state only.
pub trait PlanBuilder {
    /// Builds the plan for this operation.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or a database read fails.
    fn build_plan(&self, conn: &Connection) -> Result<OperationPlan>;
}

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The booking the operation produced or updated (if applicable).
    pub booking: Option<Booking>,
}

impl ExecutionResult {
    /// Creates a successful execution result.
    fn success(plan: &OperationPlan, booking: Option<Booking>) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            booking,
        }
    }

    /// Creates a dry-run execution result.
    fn dry_run(plan: &OperationPlan, booking: Option<Booking>) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            booking,
        }
    }
}

/// Executes booking operations against the database.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (planning without changes).
///
/// # Examples
///
/// ```no_run
/// use lodge::operations::{CreateBookingOptions, CreateBookingPlan, PlanExecutor};
/// use lodge::{Database, DatabaseConfig, Principal, Role, StayRange};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/lodge.db")).unwrap();
/// let customer = Principal::new(Uuid::new_v4(), Role::Customer);
/// let stay = StayRange::new(
///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
/// ).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let options = CreateBookingOptions::new(customer, Uuid::new_v4(), stay, today);
/// let planner = CreateBookingPlan::new(options);
///
/// // Normal execution
/// let mut executor = PlanExecutor::new(&mut db);
/// let result = executor.execute(&planner).unwrap();
/// assert!(result.success);
///
/// // Dry-run execution
/// let mut executor = PlanExecutor::new(&mut db).dry_run();
/// let result = executor.execute(&planner).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor builds and validates the plan but does
    /// not modify the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Plans and executes the given operation.
    ///
    /// In normal mode the plan is built inside an immediate-mode write
    /// transaction and its actions are applied before the transaction
    /// commits. In dry-run mode the plan is built against the plain
    /// connection and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if planning fails (validation, conflicts) or if
    /// any action fails to apply.
    pub fn execute(&mut self, planner: &dyn PlanBuilder) -> Result<ExecutionResult> {
        if self.dry_run {
            let plan = planner.build_plan(self.db.connection())?;
            log::debug!("dry-run plan: {}", plan.description);
            let booking = Self::planned_booking(&plan);
            return Ok(ExecutionResult::dry_run(&plan, booking));
        }

        let tx = self.db.begin_transaction()?;
        let plan = planner.build_plan(&tx)?;
        log::debug!(
            "executing plan: {} ({} actions)",
            plan.description,
            plan.actions.len()
        );

        for action in &plan.actions {
            Self::apply_action(&tx, action)?;
        }

        let booking = Self::result_booking(&tx, &plan)?;
        tx.commit()?;

        Ok(ExecutionResult::success(&plan, booking))
    }

    /// Applies a single action.
    fn apply_action(conn: &Connection, action: &PlanAction) -> Result<()> {
        match action {
            PlanAction::InsertBooking(booking) => Database::insert_booking(conn, booking),
            PlanAction::SetBookingStatus { id, status } => {
                if Database::update_booking_status(conn, *id, *status)? {
                    Ok(())
                } else {
                    Err(Error::NotFound {
                        resource: "Booking".into(),
                    })
                }
            }
            PlanAction::MarkBookingPaid(id) => {
                if Database::mark_booking_paid(conn, *id)? {
                    Ok(())
                } else {
                    Err(Error::NotFound {
                        resource: "Booking".into(),
                    })
                }
            }
            PlanAction::RemoveBooking(id) => {
                Database::delete_booking(conn, *id)?;
                Ok(())
            }
            PlanAction::SetRoomWindow { room, window } => {
                if Database::update_room_window(conn, *room, *window)? {
                    Ok(())
                } else {
                    Err(Error::NotFound {
                        resource: "Room".into(),
                    })
                }
            }
        }
    }

    /// Extracts the booking a plan creates, without touching the database.
    ///
    /// Used in dry-run mode, where status changes are not applied and the
    /// stored row would not reflect the plan anyway.
    fn planned_booking(plan: &OperationPlan) -> Option<Booking> {
        plan.actions.iter().find_map(|action| match action {
            PlanAction::InsertBooking(b) => Some(b.clone()),
            _ => None,
        })
    }

    /// Resolves the booking an executed plan produced or updated.
    fn result_booking(conn: &Connection, plan: &OperationPlan) -> Result<Option<Booking>> {
        for action in &plan.actions {
            match action {
                PlanAction::InsertBooking(b) => {
                    return Ok(Database::get_booking(conn, b.id())?);
                }
                PlanAction::SetBookingStatus { id, .. } | PlanAction::MarkBookingPaid(id) => {
                    return Ok(Database::get_booking(conn, *id)?);
                }
                PlanAction::RemoveBooking(_) | PlanAction::SetRoomWindow { .. } => {}
            }
        }
        Ok(None)
    }
}
