//! Configuration file discovery and loading.
//!
//! This module handles loading the user configuration file from the data
//! directory.

use crate::config::schema::Config;
use crate::database::default_data_dir;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from the user configuration file.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::ConfigLoader;
///
/// let config = ConfigLoader::load_user_config(None).unwrap();
/// println!("loaded: {}", config.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the user configuration file.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`.
    /// Otherwise uses `config.yaml` in the default data directory.
    /// A missing file is not an error; it simply yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the default data directory cannot be determined.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => default_data_dir()?.join("config.yaml"),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        Ok(Some(Self::load_file(&config_path)?))
    }

    /// Loads and parses a single configuration file.
    ///
    /// A file holding only comments (like the generated template) parses
    /// to a null document and yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed as YAML.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&contents)?;
        if value.is_null() {
            return Ok(Config::default());
        }
        let config = serde_yaml::from_value(value)?;
        Ok(config)
    }
}
