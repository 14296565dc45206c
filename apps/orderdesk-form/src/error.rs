//! # Form Error Type
//!
//! Unified error type for form commands and the console loop.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in OrderDesk                              │
//! │                                                                         │
//! │  "add" with quantity = "abc"                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ProductInput::parse() ─── ValidationError::InvalidNumber ──┐          │
//! │                                                              │          │
//! │                                                              ▼          │
//! │                                  FormError { INVALID_INPUT, message }   │
//! │                                                              │          │
//! │                                                              ▼          │
//! │                      "Please enter valid quantity and price!"           │
//! │                      (order unchanged, fields kept as typed)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid input is recoverable: the console shows the message and keeps
//! going. Only `Io` failures end the session.

use serde::Serialize;
use thiserror::Error;

use orderdesk_core::ValidationError;

/// Message shown whenever quantity or unit price fails to parse.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter valid quantity and price!";

/// Error returned from form commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_INPUT",
///   "message": "Please enter valid quantity and price!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct FormError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message for display
    pub message: String,
}

/// Error codes for form responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Quantity or unit price is not a number
    InvalidInput,

    /// Console line did not match any command
    UnknownCommand,

    /// Reading input or writing output failed
    Io,

    /// Totals could not be encoded
    Serialization,
}

impl FormError {
    /// Creates a new form error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        FormError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(command: &str) -> Self {
        FormError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: {} (type 'help' for a list)", command),
        )
    }

    /// Whether the session can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.code, ErrorCode::Io)
    }
}

/// Every validation failure surfaces as the same user notification.
impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(field = err.field(), "Rejected product input: {}", err);
        FormError::new(ErrorCode::InvalidInput, INVALID_NUMBER_MESSAGE)
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Console I/O failed: {}", err);
        FormError::new(ErrorCode::Io, format!("Console I/O failed: {}", err))
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Totals serialization failed: {}", err);
        FormError::new(ErrorCode::Serialization, "Could not encode order totals")
    }
}
