//! Error types for tabasaran-quran
//!
//! This module provides the error taxonomy of the chapter pipeline:
//! - Chapter-level failures (out of range, not available, missing translation)
//! - Upstream failures and the fallback outcome when no static data exists
//! - HTTP status code mapping for the REST API
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for tabasaran-quran operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tabasaran-quran
///
/// Recoverable conditions (upstream down, malformed translation file) are
/// handled inside the pipeline and only surface here when no narrower result
/// can be produced.
#[derive(Debug, Error)]
pub enum Error {
    /// Chapter number outside 1..=114
    #[error("chapter number {number} is out of range (expected 1-114)")]
    OutOfRange {
        /// The rejected chapter number
        number: u32,
    },

    /// Chapter identifier is not a number
    #[error("chapter identifier {raw:?} is not a number")]
    InvalidChapter {
        /// The identifier as received
        raw: String,
    },

    /// Chapter has no local translation and is therefore not served
    #[error("chapter {chapter} is not available")]
    NotAvailable {
        /// The requested chapter
        chapter: u16,
    },

    /// Chapter is advertised as available but its translation could not be loaded
    #[error("translation for chapter {chapter} is listed but could not be loaded")]
    TranslationMissing {
        /// The chapter whose translation file is missing or malformed
        chapter: u16,
    },

    /// Upstream verse service failed (status, transport or body)
    #[error("remote service unavailable for chapter {chapter}: {reason}")]
    RemoteUnavailable {
        /// The chapter being fetched
        chapter: u16,
        /// What went wrong (HTTP status, transport error, decode error)
        reason: String,
    },

    /// Upstream failed and the embedded table has no entry for the chapter
    #[error("no fallback data for chapter {chapter}")]
    NoFallbackData {
        /// The chapter missing from the static table
        chapter: u16,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "remote.base_url")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a configuration error for a specific key
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// The chapter this error is about, if any
    pub fn chapter(&self) -> Option<u16> {
        match self {
            Error::NotAvailable { chapter }
            | Error::TranslationMissing { chapter }
            | Error::RemoteUnavailable { chapter, .. }
            | Error::NoFallbackData { chapter } => Some(*chapter),
            _ => None,
        }
    }
}

/// API error response format
///
/// Returned by API endpoints when an error occurs.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "not_available",
///     "message": "chapter 5 is not available",
///     "details": {
///       "chapter": 5
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "not_available", "out_of_range")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 404 Not Found - invalid or unserved chapter
            Error::OutOfRange { .. } => 404,
            Error::InvalidChapter { .. } => 404,
            Error::NotAvailable { .. } => 404,

            // 500 Internal Server Error - data integrity and infrastructure
            Error::TranslationMissing { .. } => 500,
            Error::Config { .. } => 500,
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,
            Error::Other(_) => 500,

            // 502 Bad Gateway - upstream failure that escaped the fallback
            Error::RemoteUnavailable { .. } => 502,

            // 503 Service Unavailable - upstream down and nothing to fall back on
            Error::NoFallbackData { .. } => 503,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::OutOfRange { .. } => "out_of_range",
            Error::InvalidChapter { .. } => "invalid_chapter",
            Error::NotAvailable { .. } => "not_available",
            Error::TranslationMissing { .. } => "translation_missing",
            Error::RemoteUnavailable { .. } => "remote_unavailable",
            Error::NoFallbackData { .. } => "no_fallback_data",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
            Error::Other(_) => "internal_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        let details = match &error {
            Error::OutOfRange { number } => Some(serde_json::json!({
                "number": number,
            })),
            Error::Config { key: Some(key), .. } => Some(serde_json::json!({
                "key": key,
            })),
            other => other
                .chapter()
                .map(|chapter| serde_json::json!({ "chapter": chapter })),
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}
