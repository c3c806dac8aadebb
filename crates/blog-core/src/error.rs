//! Error types for blogdesk.
//!
//! A single error type with explicit variants for transport, protocol and
//! input validation failures. Views collapse all of them into one failure
//! outcome, but the library keeps them apart for logging and tests.

use std::fmt;
use thiserror::Error;

/// The unified error type for blog gateway operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout, local IO).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The gateway answered with a non-success status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, bad identifier, missing field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if the gateway reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Protocol(e) if e.is_not_found())
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Local storage failure (file-backed gateway).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the gateway.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Detail text from the response body, if any.
    pub detail: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// A 404 with the given detail.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, Some(detail.into()))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid blog identifier.
    #[error("invalid blog id '{value}': {reason}")]
    BlogId { value: String, reason: String },

    /// A required field is empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}
