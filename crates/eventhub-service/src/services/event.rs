//! Event service
//!
//! Handles event listing, lookup, creation, update and deletion.

use eventhub_core::{parse_event_date, DomainError, Event, EventChanges, EventFilter, Snowflake};
use tracing::{debug, info, instrument};

use crate::dto::{
    CreateEventRequest, EventListQuery, EventResponse, IdResponse, UpdateEventRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List events, optionally filtered by exact location and date
    #[instrument(skip(self))]
    pub async fn list_events(&self, query: EventListQuery) -> ServiceResult<Vec<EventResponse>> {
        let date = query
            .date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(parse_event_date)
            .transpose()
            .map_err(|e| ServiceError::bad_request("INVALID_QUERY_PARAMETER", e.to_string()))?;

        let filter = EventFilter {
            location: query.location.filter(|l| !l.is_empty()),
            date,
        };

        let events = self.ctx.event_repo().find_all(&filter).await?;
        debug!(count = events.len(), "Events listed");

        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Get a single event
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: Snowflake) -> ServiceResult<EventResponse> {
        self.find_event(event_id).await.map(EventResponse::from)
    }

    /// Create an event owned by `creator_id`
    #[instrument(skip(self, request), fields(name = %request.event_name))]
    pub async fn create_event(
        &self,
        creator_id: Snowflake,
        request: CreateEventRequest,
    ) -> ServiceResult<IdResponse> {
        let date = parse_event_date(&request.event_date)?;

        let event = Event::new(
            self.ctx.generate_id(),
            request.event_name,
            date,
            request.event_location,
            creator_id,
        )
        .with_description(request.event_description)
        .with_max_attendees(request.max_attendees);

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, max_attendees = event.max_attendees, "Event created");
        Ok(IdResponse::new(event.id.to_string(), "Event created successfully"))
    }

    /// Apply a partial update.
    ///
    /// A missing id is rejected before any store access. A body with no
    /// fields returns the event unchanged.
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: Option<Snowflake>,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event_id = event_id.ok_or_else(|| {
            ServiceError::bad_request(
                "UPDATE_EVENT_BAD_REQUEST",
                "Some important parameter missing in update request",
            )
        })?;

        let changes = EventChanges {
            name: request.event_name,
            date: request.event_date.as_deref().map(parse_event_date).transpose()?,
            location: request.event_location,
            description: request.event_description,
            max_attendees: request.max_attendees,
        };

        let mut event = self.find_event(event_id).await?;

        if event.apply(changes) {
            self.ctx.event_repo().update(&event).await?;
            info!(event_id = %event_id, "Event updated");
        }

        Ok(EventResponse::from(event))
    }

    /// Delete an event and its registrations, returning the deleted record
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: Snowflake) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .delete(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        info!(event_id = %event_id, "Event deleted");
        Ok(EventResponse::from(event))
    }

    /// Load an event or fail with `EVENT_NOT_FOUND`
    pub(crate) async fn find_event(&self, event_id: Snowflake) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id).into())
    }
}
