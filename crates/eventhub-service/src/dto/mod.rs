//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateEventRequest, EventListQuery, SignInRequest, SignUpRequest, UpdateEventRequest,
};

pub use responses::{
    AnalyticsResponse, EventListResponse, EventResponse, HealthChecks, HealthResponse,
    IdResponse, MessageResponse, MonthlyCountResponse, ReadinessResponse, SignInResponse,
    SignOutResponse, SignUpResponse, TopEventResponse, UserProfileResponse, WithMessage,
};
