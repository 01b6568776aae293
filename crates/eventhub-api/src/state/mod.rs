//! Shared handler state

use std::sync::Arc;

use eventhub_common::AppConfig;
use eventhub_service::ServiceContext;

/// Cloned into every handler; both halves are immutable after startup
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Repositories, token engine and id generator
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("app", &self.config.app.name)
            .field("env", &self.config.app.env)
            .field("service_context", &self.service_context)
            .finish()
    }
}
