//! Domain error types
//!
//! This module defines the error hierarchy for the exporter.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Grafana API errors
    #[error("Grafana error: {0}")]
    Grafana(#[from] GrafanaError),

    /// Terraform generation errors
    #[error("Generation error: {0}")]
    Generation(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Grafana API errors
///
/// Errors that occur when talking to the Grafana HTTP API.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum GrafanaError {
    /// Failed to connect to the Grafana instance
    #[error("Failed to connect to Grafana: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Credentials rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl GrafanaError {
    /// Returns true if the error came from the request timing out
    pub fn is_timeout(&self) -> bool {
        matches!(self, GrafanaError::Timeout(_))
    }
}

impl ExportError {
    /// Returns true if the error came from the request timing out
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExportError::Grafana(e) if e.is_timeout())
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
