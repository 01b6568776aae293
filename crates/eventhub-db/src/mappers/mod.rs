//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity` / `From<Model> for Entity`: database rows to domain objects
//! - `*Insert` structs: entity data prepared for binding

mod analytics;
mod event;
mod user;

pub use event::EventInsert;
pub use user::UserInsert;
