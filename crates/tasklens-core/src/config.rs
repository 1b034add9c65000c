//! Configuration for the analyzer front ends: reference time zone, output
//! rendering, and logging.

use core::fmt;
use core::str::FromStr;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable that points at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "TASKLENS_CONFIG";

const SECONDS_PER_MINUTE: i32 = 60;

/// Complete tasklens configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasklensConfig {
    /// Analysis settings
    pub analysis: AnalysisConfig,
    /// Output rendering settings
    pub output: OutputConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Analysis configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// UTC offset, in minutes, used as "local time" for the reference
    /// instant. `None` uses the system's local offset.
    pub utc_offset_minutes: Option<i32>,
}

impl AnalysisConfig {
    /// The configured offset, if any.
    ///
    /// # Errors
    /// Returns an error if the offset is a day or more away from UTC
    pub fn offset(&self) -> Result<Option<FixedOffset>> {
        let Some(minutes) = self.utc_offset_minutes else {
            return Ok(None);
        };
        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(FixedOffset::east_opt)
            .map(Some)
            .ok_or_else(|| {
                Error::Config(format!("utc_offset_minutes out of range: {minutes}"))
            })
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned human-readable lines
    #[default]
    Text,
    /// JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownVariant {
                kind: "output format",
                value: value.to_owned(),
            }),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering format
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tasklens=warn".to_owned(),
        }
    }
}

impl TasklensConfig {
    /// Get the default config directory path (`~/.tasklens`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        use dirs::home_dir;
        let home = home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".tasklens"))
    }

    /// Get the config file path: `$TASKLENS_CONFIG` when set, otherwise
    /// `~/.tasklens/config.toml`
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location.
    /// If the config doesn't exist, creates it with default values
    ///
    /// # Errors
    /// Returns an error if the config cannot be read or created
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            tracing::debug!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        use toml::from_str;
        let contents = fs::read_to_string(path).map_err(|error| {
            Error::Config(format!("Failed to read config {}: {error}", path.display()))
        })?;
        let config: Self = from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        use toml::to_string_pretty;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = to_string_pretty(self)?;

        let header = "# tasklens configuration file\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))?;

        Ok(())
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        self.analysis.offset()?;
        if self.logging.filter.trim().is_empty() {
            return Err(Error::Config("logging.filter must not be empty".to_owned()));
        }
        Ok(())
    }
}
