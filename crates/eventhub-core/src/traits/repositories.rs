//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Event, EventFilter, EventRegistrationCount, MonthlyEventCount, Registration, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email (exact match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user. A taken email fails with `UserAlreadyExists`.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Token Repository
// ============================================================================

/// Per-user set of active token identifiers
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Add a token identifier to the user's active set
    async fn add(
        &self,
        user_id: Snowflake,
        token_id: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Whether the identifier is active for the user and not past its expiry
    async fn contains(&self, user_id: Snowflake, token_id: &str) -> RepoResult<bool>;

    /// Remove one identifier; returns whether it was present
    async fn revoke(&self, user_id: Snowflake, token_id: &str) -> RepoResult<bool>;

    /// Remove every identifier for the user; returns how many were removed
    async fn revoke_all(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>>;

    /// List events matching every set filter field
    async fn find_all(&self, filter: &EventFilter) -> RepoResult<Vec<Event>>;

    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Persist all mutable fields; unknown ID fails with `EventNotFound`
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Delete and return the event, `None` if it did not exist.
    /// Registrations for the event are removed with it.
    async fn delete(&self, id: Snowflake) -> RepoResult<Option<Event>>;

    /// Events created in `[from, to)`, grouped by UTC creation month
    async fn count_by_month(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<MonthlyEventCount>>;
}

// ============================================================================
// Registration Repository
// ============================================================================

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Count registrations held by an event
    async fn count_by_event(&self, event_id: Snowflake) -> RepoResult<i64>;

    /// Insert the registration only if the event still has a free seat.
    ///
    /// The capacity check and the insert are atomic with respect to other
    /// registrations for the same event. Returns `Ok(false)` when full,
    /// `EventNotFound` when the event vanished and `AlreadyRegistered` when
    /// the (event, user) pair exists.
    async fn create_within_capacity(&self, registration: &Registration) -> RepoResult<bool>;

    /// Remove the user's registration; returns the number of rows removed
    async fn delete(&self, event_id: Snowflake, user_id: Snowflake) -> RepoResult<u64>;

    /// Events with the most registrations, busiest first
    async fn top_events(&self, limit: i64) -> RepoResult<Vec<EventRegistrationCount>>;
}

// ============================================================================
// Health
// ============================================================================

/// Backing store liveness probe
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
