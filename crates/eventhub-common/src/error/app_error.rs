//! Application error types
//!
//! Unified error handling for authentication, infrastructure and wrapped
//! domain failures.

use eventhub_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Request does not contain auth token")]
    MissingAuth,

    #[error("User not found")]
    InvalidToken,

    #[error("User does not have the required role")]
    UnauthorizedRole,

    // Database errors
    #[error("Unhandled request in db: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::MissingCredentials | Self::MissingAuth => 400,

            // 403 Forbidden
            Self::UnauthorizedRole => 403,

            // 404 Not Found; failed sign-in and unresolvable tokens look like unknown users
            Self::InvalidCredentials | Self::InvalidToken => 404,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => Self::domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "SIGN_IN_BAD_REQUEST",
            Self::InvalidCredentials => "SIGN_IN_FAIL",
            Self::MissingAuth => "HEADERS_NOT_SET",
            Self::InvalidToken => "USER_NOT_FOUND",
            Self::UnauthorizedRole => "UNAUTHORIZED_ROLE",
            Self::Database(_) => "UNHANDLED_REQUEST_IN_DB",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Structured detail for the response body
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Domain(e) => e.details(),
            _ => None,
        }
    }

    /// HTTP status for a domain error
    #[must_use]
    pub fn domain_status(e: &DomainError) -> u16 {
        if e.is_not_found() {
            404
        } else if e.is_validation() || e.is_business_rule() {
            400
        } else if e.is_conflict() {
            409
        } else {
            500
        }
    }
}

/// Error body shared by every failed API response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
