//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use eventhub_core::{Event, EventAnalytics, EventRegistrationCount, MonthlyEventCount, User};

use super::responses::{
    AnalyticsResponse, EventResponse, MonthlyCountResponse, TopEventResponse,
    UserProfileResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_id: user.email.clone(),
            plan_type: user.plan_type.clone(),
            mobile_no: user.mobile_no.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            event_name: event.name,
            event_date: event.date,
            event_location: event.location,
            event_description: event.description,
            max_attendees: event.max_attendees,
            created_by: event.created_by.to_string(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

// ============================================================================
// Analytics Mappers
// ============================================================================

impl From<MonthlyEventCount> for MonthlyCountResponse {
    fn from(row: MonthlyEventCount) -> Self {
        Self {
            month: row.month,
            total_events: row.total_events,
        }
    }
}

impl From<EventRegistrationCount> for TopEventResponse {
    fn from(row: EventRegistrationCount) -> Self {
        Self {
            event_id: row.event_id.to_string(),
            total_users: row.total_users,
        }
    }
}

impl From<EventAnalytics> for AnalyticsResponse {
    fn from(analytics: EventAnalytics) -> Self {
        Self {
            total_events: analytics.total_events.into_iter().map(Into::into).collect(),
            top_events: analytics.top_events.into_iter().map(Into::into).collect(),
            message: "Analytics fetched successfully".to_string(),
        }
    }
}
