//! Registration entity - a user's seat at an event

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// One (event, user) pair; at most one exists per pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: Snowflake,
    pub event_id: Snowflake,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(id: Snowflake, event_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            id,
            event_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
