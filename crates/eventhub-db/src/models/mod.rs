//! Database models - SQLx-compatible structs for PostgreSQL tables

mod analytics;
mod event;
mod user;

pub use analytics::{MonthlyCountModel, TopEventModel};
pub use event::EventModel;
pub use user::UserModel;
