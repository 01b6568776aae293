//! Domain entities - core business objects

mod analytics;
mod bot;
mod event;
mod registration;
mod user;

pub use analytics::{year_bounds, EventAnalytics, EventRegistrationCount, MonthlyEventCount};
pub use bot::{Bot, BotPlatform};
pub use event::{Event, EventChanges, EventFilter, DEFAULT_MAX_ATTENDEES};
pub use registration::Registration;
pub use user::User;
