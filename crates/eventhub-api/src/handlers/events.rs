//! Event handlers
//!
//! Reads are open to USER and ADMIN; writes are ADMIN only.

use axum::{extract::State, Json};
use eventhub_service::dto::{
    CreateEventRequest, EventListQuery, EventListResponse, EventResponse, IdResponse,
    UpdateEventRequest, WithMessage,
};
use eventhub_service::EventService;

use crate::extractors::{
    AdminOnly, Authorized, EventIdPath, OptionalValidatedJson, QueryParams, SnowflakePath,
    UserOrAdmin, ValidatedJson,
};
use crate::response::ApiResult;
use crate::state::AppState;

/// List events
///
/// GET /events?location=&date=
pub async fn list_events(
    State(state): State<AppState>,
    _auth: Authorized<UserOrAdmin>,
    QueryParams(query): QueryParams<EventListQuery>,
) -> ApiResult<Json<EventListResponse>> {
    let service = EventService::new(state.service_context());
    let events = service.list_events(query).await?;
    Ok(Json(EventListResponse::new(events)))
}

/// Get one event
///
/// GET /events/:eventId
pub async fn get_event(
    State(state): State<AppState>,
    _auth: Authorized<UserOrAdmin>,
    SnowflakePath(path): SnowflakePath<EventIdPath>,
) -> ApiResult<Json<WithMessage<EventResponse>>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    let event = service.get_event(event_id).await?;
    Ok(Json(WithMessage::new(event, "Event fetched successfully")))
}

/// Create an event owned by the caller
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    auth: Authorized<AdminOnly>,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Json<IdResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(auth.user_id(), request).await?;
    Ok(Json(response))
}

/// Partially update an event
///
/// PUT /events/:eventId
pub async fn update_event(
    State(state): State<AppState>,
    _auth: Authorized<AdminOnly>,
    SnowflakePath(path): SnowflakePath<EventIdPath>,
    OptionalValidatedJson(request): OptionalValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<WithMessage<EventResponse>>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    let event = service
        .update_event(Some(event_id), request.unwrap_or_default())
        .await?;
    Ok(Json(WithMessage::new(event, "Event updated successfully")))
}

/// Update request that names no event
///
/// PUT /events
pub async fn update_event_without_id(
    State(state): State<AppState>,
    _auth: Authorized<AdminOnly>,
    OptionalValidatedJson(request): OptionalValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<WithMessage<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let event = service
        .update_event(None, request.unwrap_or_default())
        .await?;
    Ok(Json(WithMessage::new(event, "Event updated successfully")))
}

/// Delete an event and its registrations
///
/// DELETE /events/:eventId
pub async fn delete_event(
    State(state): State<AppState>,
    _auth: Authorized<AdminOnly>,
    SnowflakePath(path): SnowflakePath<EventIdPath>,
) -> ApiResult<Json<WithMessage<EventResponse>>> {
    let event_id = path.event_id()?;
    let service = EventService::new(state.service_context());
    let event = service.delete_event(event_id).await?;
    Ok(Json(WithMessage::new(event, "Event deleted successfully")))
}
