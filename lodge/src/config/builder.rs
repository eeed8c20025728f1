//! Configuration assembly via the builder pattern.
//!
//! The builder merges configuration sources in precedence order and
//! produces the final [`Config`] the rest of the library consumes.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from files, environment variables, and overrides.
///
/// Sources are merged with the following precedence (highest to lowest):
///
/// 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
/// 2. Environment variables (LODGE_*)
/// 3. User config (`{data_dir}/config.yaml`)
/// 4. Built-in defaults
///
/// # Examples
///
/// ```no_run
/// use lodge::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("output format: {:?}", config.output_format);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with all sources enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory to load the user config from.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: &Path) -> Self {
        self.data_dir = Some(data_dir.to_path_buf());
        self
    }

    /// Skips loading configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::config::{Config, ConfigBuilder, OutputFormat};
    ///
    /// let custom = Config {
    ///     output_format: Some(OutputFormat::Json),
    ///     ..Default::default()
    /// };
    ///
    /// let config = ConfigBuilder::new()
    ///     .skip_files()
    ///     .skip_env()
    ///     .with_config(custom)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.output_format, Some(OutputFormat::Json));
    /// ```
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed, or if an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                merge(&mut config, file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            merge(&mut config, overrides);
        }

        Ok(config)
    }
}

/// Overlays `higher` onto `config`; set fields win.
fn merge(config: &mut Config, higher: Config) {
    if higher.data_dir.is_some() {
        config.data_dir = higher.data_dir;
    }
    if higher.disable_autoinit.is_some() {
        config.disable_autoinit = higher.disable_autoinit;
    }
    if higher.maximum_lock_wait_seconds.is_some() {
        config.maximum_lock_wait_seconds = higher.maximum_lock_wait_seconds;
    }
    if higher.output_format.is_some() {
        config.output_format = higher.output_format;
    }
}
