//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub description: Option<String>,
    pub max_attendees: i32,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
