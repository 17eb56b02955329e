//! Export configuration
//!
//! Loaded from an optional JSON file; every field has a default. Command line
//! flags override file values before validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::sink::{DelimitedOptions, Format};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Output format (default "csv")
    #[serde(default)]
    pub format: Format,

    /// Write a header row for delimited formats (default true)
    #[serde(default = "default_header")]
    pub header: bool,

    /// Field delimiter for csv, one ASCII character (default ",")
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Text written for null values by delimited formats (default "")
    #[serde(default)]
    pub null_text: String,

    /// Minimum log level (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_header() -> bool {
    true
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            header: default_header(),
            delimiter: default_delimiter(),
            null_text: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl ExportConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ExportConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Check every field; called again after overrides are applied
    pub fn validate(&self) -> CliResult<()> {
        self.delimiter_byte()?;
        self.severity()?;
        Ok(())
    }

    /// Delimiter as a single byte
    pub fn delimiter_byte(&self) -> CliResult<u8> {
        let bytes = self.delimiter.as_bytes();
        match bytes {
            [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(CliError::config_error(format!(
                "Invalid delimiter: '{}'. Must be a single ASCII character other than quote or newline.",
                self.delimiter.escape_debug()
            ))),
        }
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Options for delimited sinks
    pub fn delimited_options(&self) -> CliResult<DelimitedOptions> {
        Ok(DelimitedOptions {
            delimiter: self.delimiter_byte()?,
            header: self.header,
            null_text: self.null_text.clone(),
        })
    }
}
