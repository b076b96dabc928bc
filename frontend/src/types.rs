//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Log Types** - diagnostics panel entries
//! - **Submission Types** - request lifecycle phases
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Debug message (verbose)
    Debug,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
            LogLevel::Debug => "log-debug",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Warning => "⚠️",
            LogLevel::Debug => "🔍",
        }
    }
}

/// A single entry in the diagnostics panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Submission Types
// =============================================================================

/// Phase of one form submission.
///
/// A submission moves `Idle → Submitting → (Succeeded | Failed)`; the
/// busy indicator is visible only during `Submitting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    /// No request in flight.
    Idle,
    /// Request sent, awaiting settlement.
    Submitting,
    /// Request settled with an HTTP-success status.
    Succeeded,
    /// Request settled with an HTTP error or transport failure.
    Failed,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Server answered with a non-success HTTP status.
    Http(u16),
    /// Request could not complete (network error, aborted connection).
    Transport(String),
    /// A browser-side DOM operation failed.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(status) => write!(f, "server returned status {}", status),
            AppError::Transport(msg) => write!(f, "request failed: {}", msg),
            AppError::Dom(msg) => write!(f, "browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_deserialization() {
        let json = r#"{
            "level": "Error",
            "message": "request failed with status 500",
            "timestamp": "12:34:56"
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.message, "request failed with status 500");
    }

    #[test]
    fn app_error_display() {
        assert_eq!(AppError::Http(500).to_string(), "server returned status 500");
        assert_eq!(
            AppError::Transport("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
    }
}
