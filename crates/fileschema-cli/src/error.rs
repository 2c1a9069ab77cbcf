//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// File exceeds the configured size limit
    #[error("File {} is {} bytes, larger than the {} byte limit", path.display(), size, limit)]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// File content cannot be read in the requested encoding
    #[error("Cannot read {} as {}", path.display(), encoding)]
    InvalidEncoding { path: PathBuf, encoding: String },

    /// The content did not satisfy the schema
    #[error("Validation failed with {} issue(s)", count)]
    ValidationFailed { count: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Documentation generation error
    #[error("Documentation error: {0}")]
    Documentation(#[from] fileschema::documentation::GeneratorError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::ValidationFailed { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidEncoding { .. } => 4,
            Self::Config(_) => 5,
            Self::FileTooLarge { .. } => 6,
            Self::Documentation(_) => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Whether the error is already reported through the regular output
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::ValidationFailed { count: 1 }.exit_code(), 2);
        assert_eq!(Error::FileNotFound { path: PathBuf::from("x") }.exit_code(), 3);
        assert_eq!(Error::config("bad").exit_code(), 5);
        assert_eq!(Error::other("boom").exit_code(), 99);
    }

    #[test]
    fn test_format_error_plain() {
        let error = Error::InvalidEncoding {
            path: PathBuf::from("logo.png"),
            encoding: "utf8".to_string(),
        };
        assert_eq!(format_error(&error, false), "Error: Cannot read logo.png as utf8");
    }

    #[test]
    fn test_reported_errors() {
        assert!(Error::ValidationFailed { count: 2 }.is_reported());
        assert!(!Error::other("boom").is_reported());
    }
}
