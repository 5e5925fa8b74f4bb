//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for algolab operations
#[derive(Debug, Error)]
pub enum Error {
    /// An aggregate was requested over a zero-length sequence
    #[error("{operation} requested over an empty sequence")]
    EmptyInput { operation: &'static str },

    /// Report sink errors with the sink description
    #[error("Output error ({sink}): {message}")]
    Output { sink: String, message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create an empty-input error naming the aggregate that was refused
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an output error for a named sink
    pub fn output(sink: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether this error is the recoverable empty-input condition.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        let err = Error::empty_input("statistics");
        assert_eq!(
            err.to_string(),
            "statistics requested over an empty sequence"
        );
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_with_context_wraps_message() {
        let err = Error::empty_input("statistics").with_context("Array 1");
        assert_eq!(
            err.to_string(),
            "Array 1: statistics requested over an empty sequence"
        );
        assert!(!err.is_empty_input());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::output("memory", "closed"));
        let err = result.context("writing report").unwrap_err();
        assert!(err.to_string().starts_with("writing report: "));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
