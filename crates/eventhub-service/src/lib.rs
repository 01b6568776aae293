//! # eventhub-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AnalyticsService, AuthService, AuthenticatedUser, EventService, HealthService,
    RegistrationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    UserService,
};
