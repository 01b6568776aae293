//! Analytics service

use chrono::{Datelike, Utc};
use eventhub_core::{year_bounds, EventAnalytics};
use tracing::{debug, instrument};

use crate::dto::AnalyticsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Aggregates monthly event creation and the most-registered events
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Analytics for the current UTC calendar year
    pub async fn get_analytics(&self) -> ServiceResult<AnalyticsResponse> {
        self.get_analytics_for_year(Utc::now().year()).await
    }

    #[instrument(skip(self))]
    pub async fn get_analytics_for_year(&self, year: i32) -> ServiceResult<AnalyticsResponse> {
        let (from, to) = year_bounds(year)
            .ok_or_else(|| ServiceError::validation(format!("year out of range: {year}")))?;

        let monthly = self.ctx.event_repo().count_by_month(from, to).await?;
        let top = self
            .ctx
            .registration_repo()
            .top_events(EventAnalytics::TOP_EVENTS_LIMIT as i64)
            .await?;

        let analytics = EventAnalytics::new(monthly, top);
        debug!(
            months = analytics.total_events.len(),
            top = analytics.top_events.len(),
            "Analytics computed"
        );

        Ok(AnalyticsResponse::from(analytics))
    }
}
