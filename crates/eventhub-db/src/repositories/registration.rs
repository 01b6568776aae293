//! PostgreSQL implementation of RegistrationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use eventhub_core::{
    DomainError, EventRegistrationCount, RegistrationRepository, Registration, RepoResult,
    Snowflake,
};

use crate::models::TopEventModel;

use super::error::{map_db_error, map_unique_violation, REGISTRATIONS_EVENT_USER_KEY};

/// PostgreSQL implementation of RegistrationRepository
#[derive(Clone)]
pub struct PgRegistrationRepository {
    pool: PgPool,
}

impl PgRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PgRegistrationRepository {
    #[instrument(skip(self))]
    async fn count_by_event(&self, event_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(event_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(
        skip(self, registration),
        fields(event_id = %registration.event_id, user_id = %registration.user_id)
    )]
    async fn create_within_capacity(&self, registration: &Registration) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock serializes concurrent registrations for the same event
        let max_attendees = sqlx::query_scalar::<_, i32>(
            "SELECT max_attendees FROM events WHERE id = $1 FOR UPDATE",
        )
        .bind(registration.event_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::EventNotFound(registration.event_id))?;

        let registered =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                .bind(registration.event_id.into_inner())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if registered >= i64::from(max_attendees) {
            debug!(registered, max_attendees, "Event is full");
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        sqlx::query(
            r"
            INSERT INTO registrations (id, event_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(registration.id.into_inner())
        .bind(registration.event_id.into_inner())
        .bind(registration.user_id.into_inner())
        .bind(registration.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, REGISTRATIONS_EVENT_USER_KEY, || {
                DomainError::AlreadyRegistered
            })
        })?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete(&self, event_id: Snowflake, user_id: Snowflake) -> RepoResult<u64> {
        let result =
            sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND user_id = $2")
                .bind(event_id.into_inner())
                .bind(user_id.into_inner())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn top_events(&self, limit: i64) -> RepoResult<Vec<EventRegistrationCount>> {
        let rows = sqlx::query_as::<_, TopEventModel>(
            r"
            SELECT event_id, COUNT(*) AS total_users
            FROM registrations
            GROUP BY event_id
            ORDER BY total_users DESC, event_id ASC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(EventRegistrationCount::from).collect())
    }
}
