//! Request DTOs for API endpoints
//!
//! Bodies use camelCase field names. Request DTOs that take user input
//! implement `Validate`; event dates stay strings until the service parses them.

use eventhub_core::Role;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Account sign-up request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email_id: String,

    #[validate(length(min = 1, max = 50, message = "Plan type must be 1-50 characters"))]
    pub plan_type: String,

    #[validate(length(min = 5, max = 20, message = "Mobile number must be 5-20 characters"))]
    pub mobile_no: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Defaults to `USER`
    #[serde(default)]
    pub role: Option<Role>,
}

/// Sign-in request. Both fields are checked for presence by the service so
/// that a missing one maps to `SIGN_IN_BAD_REQUEST` rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub event_name: String,

    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[validate(length(min = 1, message = "Event date is required"))]
    pub event_date: String,

    #[validate(length(min = 1, max = 200, message = "Event location must be 1-200 characters"))]
    pub event_location: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub event_description: Option<String>,

    #[validate(range(min = 1, message = "maxAttendees must be at least 1"))]
    pub max_attendees: Option<i32>,
}

/// Partial event update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub event_name: Option<String>,

    #[validate(length(min = 1, message = "Event date must not be empty"))]
    pub event_date: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Event location must be 1-200 characters"))]
    pub event_location: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub event_description: Option<String>,

    #[validate(range(min = 1, message = "maxAttendees must be at least 1"))]
    pub max_attendees: Option<i32>,
}

/// Query string for listing events
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListQuery {
    pub location: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub date: Option<String>,
}
