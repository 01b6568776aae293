//! Domain errors - error types for the domain layer

use serde_json::{json, Value};
use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(Snowflake),

    #[error("Event not found")]
    EventNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bot name must be at least {min} characters")]
    BotNameTooShort { min: usize },

    #[error("Unsupported bot platform: {0}")]
    UnsupportedPlatform(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    UserAlreadyExists { field: &'static str, value: String },

    #[error("User is already registered for this event")]
    AlreadyRegistered,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Event has reached maximum number of attendees")]
    EventFull,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Unhandled request in db: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::EventNotFound(_) => "EVENT_NOT_FOUND",

            Self::ValidationError(_)
            | Self::BotNameTooShort { .. }
            | Self::UnsupportedPlatform(_) => "VALIDATION_ERROR",

            Self::UserAlreadyExists { .. } => "USER_ALREADY_EXISTS",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",

            Self::EventFull => "EVENT_FULL",

            Self::DatabaseError(_) => "UNHANDLED_REQUEST_IN_DB",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Structured detail attached to the error response, if any
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::UserAlreadyExists { field, value } => Some(json!({
                "field": field,
                "value": value,
            })),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::EventNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::BotNameTooShort { .. } | Self::UnsupportedPlatform(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists { .. } | Self::AlreadyRegistered
        )
    }

    /// Business rule violations surface as bad requests
    pub fn is_business_rule(&self) -> bool {
        matches!(self, Self::EventFull)
    }
}
