//! Registration handlers

use axum::{extract::State, Json};
use eventhub_service::dto::MessageResponse;
use eventhub_service::RegistrationService;

use crate::extractors::{Authorized, EventIdPath, SnowflakePath, UserOrAdmin};
use crate::response::ApiResult;
use crate::state::AppState;

/// Register the caller for an event
///
/// POST /events/:eventId/register
pub async fn register(
    State(state): State<AppState>,
    auth: Authorized<UserOrAdmin>,
    SnowflakePath(path): SnowflakePath<EventIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let event_id = path.event_id()?;
    let service = RegistrationService::new(state.service_context());
    let response = service.register(auth.user_id(), event_id).await?;
    Ok(Json(response))
}

/// Drop the caller's registration
///
/// DELETE /events/:eventId/register
pub async fn unregister(
    State(state): State<AppState>,
    auth: Authorized<UserOrAdmin>,
    SnowflakePath(path): SnowflakePath<EventIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let event_id = path.event_id()?;
    let service = RegistrationService::new(state.service_context());
    let response = service.unregister(auth.user_id(), event_id).await?;
    Ok(Json(response))
}
