//! Event entity - a scheduled gathering users can register for

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Capacity applied when an event is created without one
pub const DEFAULT_MAX_ATTENDEES: i32 = 100;

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Snowflake,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: Option<String>,
    pub max_attendees: i32,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        id: Snowflake,
        name: String,
        date: DateTime<Utc>,
        location: String,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            date,
            location,
            description: None,
            max_attendees: DEFAULT_MAX_ATTENDEES,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_max_attendees(mut self, max_attendees: Option<i32>) -> Self {
        self.max_attendees = max_attendees.unwrap_or(DEFAULT_MAX_ATTENDEES);
        self
    }

    /// Whether `registered` attendees already fill the event
    #[inline]
    pub fn is_full(&self, registered: i64) -> bool {
        registered >= i64::from(self.max_attendees)
    }

    /// Seats left given the current registration count (never negative)
    pub fn remaining_capacity(&self, registered: i64) -> i64 {
        (i64::from(self.max_attendees) - registered).max(0)
    }

    /// Apply a partial update and bump `updated_at`.
    /// Returns `false` when no field was supplied.
    pub fn apply(&mut self, changes: EventChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(max_attendees) = changes.max_attendees {
            self.max_attendees = max_attendees;
        }
        self.updated_at = Utc::now();
        true
    }
}

/// Partial set of event fields for an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChanges {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_attendees: Option<i32>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.max_attendees.is_none()
    }
}

/// Equality filters for listing events; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.location
            .as_deref()
            .map_or(true, |location| event.location == location)
            && self.date.map_or(true, |date| event.date == date)
    }
}
