//! Error types for the export pipeline.
//!
//! Every fallible step of the pipeline reports an [`ExportError`]. Per-driver
//! extraction is deliberately absent from this list: a broken driver degrades to
//! an empty track instead of producing an error.
//!
//! ## Error Categories
//!
//! - **File Errors**: Problems reading the session archive or writing the artifact
//! - **Parse Errors**: Malformed session info or position data
//! - **Session Errors**: The requested session (and its fallback season) is unavailable
//! - **Data Errors**: No driver produced a single usable coordinate
//! - **Config Errors**: Invalid export configuration
//!
//! ## Recovery and Retry
//!
//! ```rust
//! use trackcast::ExportError;
//!
//! let error = ExportError::session_not_found("2025 British Grand Prix R");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;

/// Main error type for export operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    #[error("File error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Session not found: {session}")]
    SessionNotFound { session: String },

    #[error("Session unavailable: {primary}; fallback failed: {fallback}")]
    SessionUnavailable { primary: String, fallback: String },

    #[error("No valid coordinate data found for any of {drivers} drivers")]
    NoCoordinateData { drivers: usize },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Failed to render artifact: {reason}")]
    Render { reason: String },
}

impl ExportError {
    /// Returns whether loading another season may succeed after this error.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExportError::File { .. } => true,
            ExportError::Parse { .. } => true,
            ExportError::SessionNotFound { .. } => true,
            ExportError::SessionUnavailable { .. } => false,
            ExportError::NoCoordinateData { .. } => false,
            ExportError::Config { .. } => false,
            ExportError::Render { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ExportError::File { .. } => vec![
                "Check the cache directory exists and is readable",
                "Check the output directory is writable",
                "Check file permissions",
            ],
            ExportError::Parse { .. } => vec![
                "Verify session.yaml and position_data.json are intact",
                "Re-populate the session cache",
            ],
            ExportError::SessionNotFound { .. } => vec![
                "Check the event name spelling",
                "Verify the season has been cached",
                "Enable the previous-season fallback",
            ],
            ExportError::SessionUnavailable { .. } => vec![
                "Populate the cache for the requested season",
                "Choose an event that exists in the cache",
            ],
            ExportError::NoCoordinateData { .. } => vec![
                "Check the session actually contains position data",
                "Select drivers that took part in the session",
            ],
            ExportError::Config { .. } => vec![
                "Fix the reported field in trackcast.yaml",
                "Remove the file to fall back to defaults",
            ],
            ExportError::Render { .. } => vec!["Report the dataset that failed to render"],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        ExportError::File { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl ToString) -> Self {
        ExportError::Parse { context: context.into(), details: details.to_string() }
    }

    /// Helper constructor for a missing session.
    pub fn session_not_found(session: impl Into<String>) -> Self {
        ExportError::SessionNotFound { session: session.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(reason: impl Into<String>) -> Self {
        ExportError::Config { reason: reason.into() }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Render { reason: err.to_string() }
    }
}
