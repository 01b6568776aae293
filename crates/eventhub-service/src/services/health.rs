//! Health service

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Liveness; does not touch the store
    pub fn health(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Readiness: the store answers a ping
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match self.ctx.health_check().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        };

        ReadinessResponse::ready(database_healthy)
    }
}
