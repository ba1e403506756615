//! Error types for Brand Console
//!
//! This module provides unified error handling across the console,
//! split along the two failure classes the data manager distinguishes:
//! validation errors (local, user-correctable, block submission) and
//! transport errors (network/remote, surfaced as a generic message with
//! full detail reserved for logs).

use thiserror::Error;

/// The main error type for Brand Console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("{message}")]
    FieldValidation { field: String, message: String },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Network-level failure (connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote endpoint answered with a non-success status
    #[error("Remote endpoint returned {status}: {detail}")]
    Http { status: u16, detail: String },

    /// Remote response violated the adapter contract
    /// (e.g. the read endpoint did not return a JSON array)
    #[error("Contract violation: {0}")]
    Contract(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// Record not found in the in-memory list
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ConsoleError::Transport(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        ConsoleError::Http {
            status,
            detail: detail.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract(msg: impl Into<String>) -> Self {
        ConsoleError::Contract(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConsoleError::Validation(_) | ConsoleError::FieldValidation { .. }
        )
    }

    /// Check if this error is a transport-class error
    ///
    /// Transport-class errors are surfaced to the user as a generic
    /// message; the full detail only goes to the log.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ConsoleError::Transport(_)
                | ConsoleError::Http { .. }
                | ConsoleError::Contract(_)
                | ConsoleError::JsonSerialization(_)
        )
    }

    /// The message shown to the user for this error
    ///
    /// Validation errors carry user-correctable text and are shown as-is.
    /// Everything else collapses to a generic failure message; callers are
    /// expected to log the full error before calling this.
    pub fn user_message(&self, operation: &str) -> String {
        match self {
            ConsoleError::Validation(msg) => msg.clone(),
            ConsoleError::FieldValidation { message, .. } => message.clone(),
            _ => format!("Failed to {operation}. See logs for details."),
        }
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

// ============================================================================
// Tests
// ============================================================================
