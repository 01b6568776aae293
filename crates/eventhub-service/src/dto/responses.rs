//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use eventhub_core::Role;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Payload with a human-readable `message` merged into the same object
#[derive(Debug, Serialize)]
pub struct WithMessage<T> {
    #[serde(flatten)]
    pub data: T,
    pub message: String,
}

impl<T> WithMessage<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Bare acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identifier of the record an operation touched
#[derive(Debug, Clone, Serialize)]
pub struct IdResponse {
    pub id: String,
    pub message: String,
}

impl IdResponse {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_id: String,
    pub message: String,
}

impl SignUpResponse {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: "User created successfully".to_string(),
        }
    }
}

/// Successful sign-in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub message: String,
    pub access_token: String,
    pub user_id: String,
    /// First name of the account holder
    pub user_name: String,
    pub email: String,
}

/// Profile of the signed-in user; never carries password or token fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub plan_type: String,
    pub mobile_no: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of revoking sessions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutResponse {
    pub revoked_sessions: u64,
    pub message: String,
}

// ============================================================================
// Event Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    pub max_attendees: i32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
    pub message: String,
}

impl EventListResponse {
    pub fn new(events: Vec<EventResponse>) -> Self {
        Self {
            events,
            message: "Events fetched successfully".to_string(),
        }
    }
}

// ============================================================================
// Analytics Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCountResponse {
    pub month: u32,
    pub total_events: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEventResponse {
    pub event_id: String,
    pub total_users: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_events: Vec<MonthlyCountResponse>,
    pub top_events: Vec<TopEventResponse>,
    pub message: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
