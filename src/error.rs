//! Custom error types for upgrade-notes.

use thiserror::Error;

/// Main error type for upgrade-notes operations.
///
/// Only whole-run problems surface as errors. Per-package conditions such as
/// a missing notes file or a non-numeric origin version are normal outcomes
/// and never reach this type.
#[derive(Error, Debug)]
pub enum UpgradeNotesError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    // Event stream errors
    #[error("Invalid event stream: {0}")]
    InvalidEvents(String),

    // TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // JSON parsing errors
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using UpgradeNotesError
pub type Result<T> = std::result::Result<T, UpgradeNotesError>;

impl UpgradeNotesError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an invalid event stream error
    pub fn invalid_events(msg: impl Into<String>) -> Self {
        Self::InvalidEvents(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for UpgradeNotesError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}
