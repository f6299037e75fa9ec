//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Mercato recommendation engine.
///
/// Covers domain, infrastructure, and presentation layer faults. Cache errors
/// exist in the taxonomy but are absorbed by the service layer: the cache is
/// an optimization, never a source of truth.
#[derive(Error, Debug)]
pub enum MercatoError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed or non-canonicalizable request context
    #[error("Invalid context: {0}")]
    InvalidContext(String),

    // ============ Infrastructure Errors ============
    /// Database error (the candidate source or sync store failed)
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MercatoError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::InvalidContext(_) => 400,
            Self::Database(_) | Self::Timeout(_) => 503,
            Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidContext(_) => "INVALID_CONTEXT",
            Self::Database(_) => "SOURCE_UNAVAILABLE",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an invalid-context error.
    #[must_use]
    pub fn invalid_context<T: Into<String>>(message: T) -> Self {
        Self::InvalidContext(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable by the caller.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Cache(_) | Self::Timeout(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for MercatoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::PoolTimedOut => Self::Timeout("database pool acquire".to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for MercatoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `MercatoError`.
    #[must_use]
    pub fn from_error(error: &MercatoError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&MercatoError> for ErrorResponse {
    fn from(error: &MercatoError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(MercatoError::not_found("User", 1).status_code(), 404);
        assert_eq!(MercatoError::validation("max_results").status_code(), 400);
        assert_eq!(MercatoError::invalid_context("bad json").status_code(), 400);
        assert_eq!(MercatoError::Database("down".to_string()).status_code(), 503);
        assert_eq!(MercatoError::Timeout("read".to_string()).status_code(), 503);
        assert_eq!(MercatoError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(MercatoError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MercatoError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            MercatoError::invalid_context("bad").error_code(),
            "INVALID_CONTEXT"
        );
        assert_eq!(
            MercatoError::Database("down".to_string()).error_code(),
            "SOURCE_UNAVAILABLE"
        );
        assert_eq!(
            MercatoError::Cache("down".to_string()).error_code(),
            "CACHE_ERROR"
        );
    }

    #[test]
    fn test_retriable_errors() {
        assert!(MercatoError::Database("connection lost".to_string()).is_retriable());
        assert!(MercatoError::Cache("connection lost".to_string()).is_retriable());
        assert!(MercatoError::Timeout("read".to_string()).is_retriable());
        assert!(!MercatoError::not_found("User", 1).is_retriable());
        assert!(!MercatoError::invalid_context("bad").is_retriable());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = MercatoError::not_found("User", 7);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.message.contains("User"));
        assert!(response.message.contains('7'));
    }

    #[test]
    fn test_json_error_maps_to_internal() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let mapped = MercatoError::from(err);
        assert_eq!(mapped.error_code(), "INTERNAL_ERROR");
    }
}
