//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in eventhub-core.

mod error;
mod event;
mod health;
mod registration;
mod token;
mod user;

pub use event::PgEventRepository;
pub use health::PgHealthCheck;
pub use registration::PgRegistrationRepository;
pub use token::PgTokenRepository;
pub use user::PgUserRepository;
