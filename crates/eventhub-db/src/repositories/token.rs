//! PostgreSQL implementation of TokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use eventhub_core::{DomainError, RepoResult, Snowflake, TokenRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of TokenRepository
#[derive(Clone)]
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Drop identifiers whose expiry has passed; returns how many were removed
    #[instrument(skip(self))]
    pub async fn purge_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM user_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    #[instrument(skip(self, token_id))]
    async fn add(
        &self,
        user_id: Snowflake,
        token_id: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let token_id = Uuid::parse_str(token_id)
            .map_err(|e| DomainError::InternalError(format!("invalid token id: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO user_tokens (token_id, user_id, issued_at, expires_at)
            VALUES ($1, $2, NOW(), $3)
            ",
        )
        .bind(token_id)
        .bind(user_id.into_inner())
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token_id))]
    async fn contains(&self, user_id: Snowflake, token_id: &str) -> RepoResult<bool> {
        // A malformed identifier can never have been issued
        let Ok(token_id) = Uuid::parse_str(token_id) else {
            return Ok(false);
        };

        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM user_tokens
                WHERE token_id = $1 AND user_id = $2 AND expires_at > NOW()
            )
            ",
        )
        .bind(token_id)
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, token_id))]
    async fn revoke(&self, user_id: Snowflake, token_id: &str) -> RepoResult<bool> {
        let Ok(token_id) = Uuid::parse_str(token_id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM user_tokens WHERE token_id = $1 AND user_id = $2")
            .bind(token_id)
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn revoke_all(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM user_tokens WHERE user_id = $1")
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
