//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and principal
//! resolution.

use std::path::PathBuf;

use uuid::Uuid;

use crate::error::CliError;
use lodge::database::default_data_dir;
use lodge::{Config, ConfigBuilder, Database, DatabaseConfig, Principal, Role};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// The acting user's id.
    pub actor: Option<Uuid>,

    /// The acting user's role.
    pub role: Role,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

impl GlobalOptions {
    /// Resolve the acting principal from the global options.
    ///
    /// Every booking operation is performed on behalf of a user, so
    /// commands that mutate or list bookings require `--actor`.
    pub fn principal(&self) -> Result<Principal, CliError> {
        let subject = self.actor.ok_or_else(|| {
            CliError::InvalidArguments(
                "--actor <uuid> is required (or set LODGE_ACTOR)".to_string(),
            )
        })?;
        Ok(Principal::new(subject, self.role))
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration file in the data directory
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the data directory from global options and configuration.
///
/// Priority: `--data-dir` flag > configuration file > `~/.lodge`.
pub fn resolve_data_dir(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }

    if let Some(ref data_dir) = config.data_dir {
        return Ok(data_dir.clone());
    }

    default_data_dir().map_err(CliError::from)
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global, config)?;
    let db_path = data_dir.join("lodge.db");

    let autoinit_disabled =
        global.disable_autoinit || config.disable_autoinit.unwrap_or(false);
    if !db_path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Today's date in the local timezone.
///
/// All stay validation and window reopening is day-granular, so the local
/// calendar date is the reference point.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
