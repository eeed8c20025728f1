//! Environment variable handling for configuration overrides.
//!
//! This module provides support for LODGE_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all LODGE_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric wait time, unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // LODGE_DATA_DIR
        if let Ok(dir) = env::var("LODGE_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        // LODGE_DISABLE_AUTOINIT
        if let Ok(val) = env::var("LODGE_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("LODGE_DISABLE_AUTOINIT", &val)?);
        }

        // LODGE_MAXIMUM_LOCK_WAIT_SECONDS
        if let Ok(seconds) = env::var("LODGE_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: "LODGE_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        // LODGE_OUTPUT_FORMAT
        if let Ok(format) = env::var("LODGE_OUTPUT_FORMAT") {
            config.output_format =
                Some(
                    format
                        .parse::<OutputFormat>()
                        .map_err(|message| Error::Validation {
                            field: "LODGE_OUTPUT_FORMAT".into(),
                            message,
                        })?,
                );
        }

        Ok(())
    }

    /// Parses a boolean environment variable value.
    fn parse_bool(name: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: name.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}
