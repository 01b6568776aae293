//! # eventhub-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    year_bounds, Bot, BotPlatform, Event, EventAnalytics, EventChanges, EventFilter,
    EventRegistrationCount, MonthlyEventCount, Registration, User, DEFAULT_MAX_ATTENDEES,
};
pub use error::DomainError;
pub use traits::{
    EventRepository, HealthCheck, RegistrationRepository, RepoResult, TokenRepository,
    UserRepository,
};
pub use value_objects::{
    parse_event_date, Role, RoleParseError, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
