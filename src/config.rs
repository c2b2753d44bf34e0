//! Configuration module for media-browser
//!
//! Stores the default catalog, the preferred layout and display options in
//! the user's config directory (`~/.config/media-browser/config.toml` on
//! Linux). Values can be overridden with `MEDIA_BROWSER_*` environment
//! variables, e.g. `MEDIA_BROWSER_VIEW_MODE=thumbnail`.

use crate::view::{DisplayOptions, ViewMode};
use chrono::format::{Item, StrftimeItems};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "MEDIA_BROWSER";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MediaBrowserConfig {
    /// Asset catalog (JSON) used when `--catalog` is not given
    pub catalog: Option<PathBuf>,

    /// Layout used when `--view` is not given
    pub view_mode: ViewMode,

    /// chrono format string for last-modified dates
    pub date_format: String,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for MediaBrowserConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            view_mode: ViewMode::default(),
            date_format: DisplayOptions::default().date_format,
            quiet: false,
        }
    }
}

impl MediaBrowserConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("media-browser").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created,
    /// or if `date_format` is not a valid chrono format string.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Creating default configuration at {}", path.display());
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .add_source(environment)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        validate_date_format(&config.date_format)?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Display options derived from this configuration
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            date_format: self.date_format.clone(),
        }
    }
}

fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Message(format!(
            "Invalid date_format {format:?}: not a valid chrono format string"
        )));
    }
    Ok(())
}
