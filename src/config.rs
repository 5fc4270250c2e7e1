//! Converter configuration
//!
//! Settings are read from an optional TOML file and then overridden by
//! command-line flags:
//!
//! ```toml
//! [logging]
//! file = "svy21kit.log"
//! level = "info"
//!
//! [batch]
//! skip_header = true
//! show_progress = true
//! ```

use std::fs;
use std::str::FromStr;
use log::LevelFilter;

use crate::errors::{ConvertError, ConvertResult};

/// Default log file written in the working directory
pub const DEFAULT_LOG_FILE: &str = "svy21kit.log";

/// Runtime settings for the converter
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Path of the log file
    pub log_file: String,
    /// Most verbose level written to the log file
    pub log_level: LevelFilter,
    /// Discard the first row of batch input files
    pub skip_header: bool,
    /// Draw a progress bar during batch conversion
    pub show_progress: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_level: LevelFilter::Info,
            skip_header: true,
            show_progress: true,
        }
    }
}

impl FromStr for ConverterConfig {
    type Err = ConvertError;

    /// Parse configuration from a TOML string
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    fn from_str(content: &str) -> ConvertResult<Self> {
        let toml_table: toml::Table = content.parse()
            .map_err(|e| ConvertError::Config(format!("Failed to parse TOML: {}", e)))?;

        let mut config = ConverterConfig::default();

        if let Some(logging) = toml_table.get("logging") {
            if let Some(file) = logging.get("file") {
                config.log_file = file.as_str()
                    .ok_or_else(|| Self::type_error("logging.file", "a string"))?
                    .to_string();
            }
            if let Some(level) = logging.get("level") {
                let level_str = level.as_str()
                    .ok_or_else(|| Self::type_error("logging.level", "a string"))?;
                config.log_level = LevelFilter::from_str(level_str)
                    .map_err(|_| ConvertError::Config(format!("Unknown log level: {}", level_str)))?;
            }
        }

        if let Some(batch) = toml_table.get("batch") {
            if let Some(skip) = batch.get("skip_header") {
                config.skip_header = skip.as_bool()
                    .ok_or_else(|| Self::type_error("batch.skip_header", "a boolean"))?;
            }
            if let Some(progress) = batch.get("show_progress") {
                config.show_progress = progress.as_bool()
                    .ok_or_else(|| Self::type_error("batch.show_progress", "a boolean"))?;
            }
        }

        Ok(config)
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> ConvertResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("Cannot read config file {}: {}", path, e)))?;

        contents.parse()
    }

    fn type_error(key: &str, expected: &str) -> ConvertError {
        ConvertError::Config(format!("'{}' must be {}", key, expected))
    }
}
