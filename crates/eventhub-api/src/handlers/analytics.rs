//! Analytics handler

use axum::{extract::State, Json};
use eventhub_service::dto::AnalyticsResponse;
use eventhub_service::AnalyticsService;

use crate::extractors::{AdminOnly, Authorized};
use crate::response::ApiResult;
use crate::state::AppState;

/// Monthly event counts for the current year and the busiest events
///
/// POST /events/analytics
pub async fn get_analytics(
    State(state): State<AppState>,
    _auth: Authorized<AdminOnly>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let service = AnalyticsService::new(state.service_context());
    let response = service.get_analytics().await?;
    Ok(Json(response))
}
