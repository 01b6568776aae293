//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use eventhub_common::JwtService;
use eventhub_core::{
    EventRepository, HealthCheck, RegistrationRepository, Snowflake, SnowflakeGenerator,
    TokenRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for users, tokens, events and registrations
/// - The backing store health probe
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn TokenRepository>,
    event_repo: Arc<dyn EventRepository>,
    registration_repo: Arc<dyn RegistrationRepository>,
    health_check: Arc<dyn HealthCheck>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_repo: Arc<dyn TokenRepository>,
        event_repo: Arc<dyn EventRepository>,
        registration_repo: Arc<dyn RegistrationRepository>,
        health_check: Arc<dyn HealthCheck>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            event_repo,
            registration_repo,
            health_check,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the active token set
    pub fn token_repo(&self) -> &dyn TokenRepository {
        self.token_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the registration repository
    pub fn registration_repo(&self) -> &dyn RegistrationRepository {
        self.registration_repo.as_ref()
    }

    pub fn health_check(&self) -> &dyn HealthCheck {
        self.health_check.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    token_repo: Option<Arc<dyn TokenRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    registration_repo: Option<Arc<dyn RegistrationRepository>>,
    health_check: Option<Arc<dyn HealthCheck>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn token_repo(mut self, repo: Arc<dyn TokenRepository>) -> Self {
        self.token_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn registration_repo(mut self, repo: Arc<dyn RegistrationRepository>) -> Self {
        self.registration_repo = Some(repo);
        self
    }

    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_check = Some(check);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.token_repo.ok_or_else(|| ServiceError::validation("token_repo is required"))?,
            self.event_repo.ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.registration_repo
                .ok_or_else(|| ServiceError::validation("registration_repo is required"))?,
            self.health_check.ok_or_else(|| ServiceError::validation("health_check is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
