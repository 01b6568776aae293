//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates repository calls for one area of the domain.

pub mod analytics;
pub mod auth;
pub mod context;
pub mod error;
pub mod event;
pub mod health;
pub mod registration;
pub mod user;

pub use analytics::AnalyticsService;
pub use auth::{AuthService, AuthenticatedUser};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use health::HealthService;
pub use registration::RegistrationService;
pub use user::UserService;
