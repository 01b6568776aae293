//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod analytics;
pub mod events;
pub mod health;
pub mod registrations;
pub mod users;
