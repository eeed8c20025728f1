//! Configuration system for lodge.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (LODGE_*)
//! 3. User config (`~/.lodge/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use lodge::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .build()
//!     .unwrap();
//!
//! println!("lock wait: {:?}", config.maximum_lock_wait_seconds);
//! ```
//!
//! Loading from a specific data directory:
//!
//! ```no_run
//! use lodge::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/var/lib/lodge"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use lodge::config::{Config, ConfigBuilder, OutputFormat};
//!
//! let custom = Config {
//!     output_format: Some(OutputFormat::Json),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.output_format, Some(OutputFormat::Json));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, OutputFormat};
