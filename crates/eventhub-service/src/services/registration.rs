//! Registration service
//!
//! Seats users at events while keeping every event within its capacity.

use eventhub_core::{DomainError, Registration, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::MessageResponse;

use super::context::ServiceContext;
use super::event::EventService;
use super::error::ServiceResult;

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register the user for the event.
    ///
    /// The count check here rejects obviously full events early; the
    /// repository repeats it atomically with the insert.
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        user_id: Snowflake,
        event_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let event = EventService::new(self.ctx).find_event(event_id).await?;

        let registered = self.ctx.registration_repo().count_by_event(event_id).await?;
        if event.is_full(registered) {
            warn!(registered, max_attendees = event.max_attendees, "Event is full");
            return Err(DomainError::EventFull.into());
        }

        let registration = Registration::new(self.ctx.generate_id(), event_id, user_id);
        if !self
            .ctx
            .registration_repo()
            .create_within_capacity(&registration)
            .await?
        {
            warn!("Event filled before the registration was stored");
            return Err(DomainError::EventFull.into());
        }

        info!(
            remaining = event.remaining_capacity(registered + 1),
            "Registered for event"
        );
        Ok(MessageResponse::new("Registered for event successfully"))
    }

    /// Remove the user's registration. Succeeds even if none existed.
    #[instrument(skip(self))]
    pub async fn unregister(
        &self,
        user_id: Snowflake,
        event_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        EventService::new(self.ctx).find_event(event_id).await?;

        let removed = self
            .ctx
            .registration_repo()
            .delete(event_id, user_id)
            .await?;

        info!(removed, "Unregistered from event");
        Ok(MessageResponse::new("Unregistered from event successfully"))
    }
}
