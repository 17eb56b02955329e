//! CLI-specific error types

use std::fmt;
use std::io;

use crate::export::ExportError;
use crate::source::SourceError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or override invalid
    ConfigError,
    /// Fixture could not be loaded
    SourceError,
    /// The export itself failed
    ExportFailed,
    /// stdout/stderr failure
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CLI_CONFIG_ERROR",
            Self::SourceError => "CLI_SOURCE_ERROR",
            Self::ExportFailed => "CLI_EXPORT_FAILED",
            Self::IoError => "CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        Self::new(CliErrorCode::SourceError, format!("{} ({})", e, e.code()))
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::new(CliErrorCode::ExportFailed, format!("{} ({})", e, e.code()))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("delimiter must be ASCII");
        assert_eq!(err.to_string(), "CLI_CONFIG_ERROR: delimiter must be ASCII");
    }

    #[test]
    fn test_from_export_error() {
        let err: CliError = ExportError::Query("no such table".into()).into();
        assert_eq!(err.code(), CliErrorCode::ExportFailed);
        assert!(err.message().contains("EXPORT_QUERY_FAILED"));
        assert!(err.message().contains("no such table"));
    }
}
