//! Event entity <-> model mapper

use eventhub_core::{Event, Snowflake};

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: Snowflake::new(model.id),
            name: model.name,
            date: model.event_date,
            location: model.location,
            description: model.description,
            max_attendees: model.max_attendees,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Event values bound by insert and update statements
pub struct EventInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub location: &'a str,
    pub description: Option<&'a str>,
    pub max_attendees: i32,
    pub created_by: i64,
}

impl<'a> EventInsert<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self {
            id: event.id.into_inner(),
            name: &event.name,
            location: &event.location,
            description: event.description.as_deref(),
            max_attendees: event.max_attendees,
            created_by: event.created_by.into_inner(),
        }
    }
}
