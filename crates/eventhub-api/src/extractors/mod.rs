//! Axum extractors for request handling
//!
//! Custom extractors for the authorization gate, validation, path and query
//! parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AdminOnly, AnyRole, Authorized, RoleSet, UserOrAdmin};
pub use path::{EventIdPath, SnowflakePath};
pub use query::QueryParams;
pub use validated::{OptionalValidatedJson, ValidatedJson};
