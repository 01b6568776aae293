//! Error handling utilities for repositories

use eventhub_core::DomainError;
use sqlx::Error as SqlxError;

/// Unique constraint on `users.email`
pub const USERS_EMAIL_KEY: &str = "users_email_key";

/// Unique constraint on `registrations (event_id, user_id)`
pub const REGISTRATIONS_EVENT_USER_KEY: &str = "registrations_event_user_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on `constraint` with `on_unique`.
/// Violations of any other constraint, such as a primary key, stay database errors.
pub fn map_unique_violation<F>(e: SqlxError, constraint: &str, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(constraint) {
            return on_unique();
        }
    }
    map_db_error(e)
}
