//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use eventhub_core::{
    DomainError, Event, EventFilter, EventRepository, MonthlyEventCount, RepoResult, Snowflake,
};

use crate::mappers::EventInsert;
use crate::models::{EventModel, MonthlyCountModel};

use super::error::map_db_error;

const EVENT_COLUMNS: &str = "id, name, event_date, location, description, max_attendees, \
                             created_by, created_at, updated_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: &EventFilter) -> RepoResult<Vec<Event>> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM events WHERE TRUE"));

        if let Some(location) = &filter.location {
            query.push(" AND location = ").push_bind(location.clone());
        }
        if let Some(date) = filter.date {
            query.push(" AND event_date = ").push_bind(date);
        }
        query.push(" ORDER BY event_date ASC, id ASC");

        let rows = query
            .build_query_as::<EventModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self), fields(event_id = %event.id))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        let insert = EventInsert::new(event);

        sqlx::query(
            r"
            INSERT INTO events (id, name, event_date, location, description, max_attendees,
                                created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(event.date)
        .bind(insert.location)
        .bind(insert.description)
        .bind(insert.max_attendees)
        .bind(insert.created_by)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(event_id = %event.id))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let update = EventInsert::new(event);

        let result = sqlx::query(
            r"
            UPDATE events
            SET name = $2, event_date = $3, location = $4, description = $5,
                max_attendees = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.name)
        .bind(event.date)
        .bind(update.location)
        .bind(update.description)
        .bind(update.max_attendees)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EventNotFound(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "DELETE FROM events WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn count_by_month(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepoResult<Vec<MonthlyEventCount>> {
        let rows = sqlx::query_as::<_, MonthlyCountModel>(
            r"
            SELECT EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC')::INT AS month,
                   COUNT(*) AS total_events
            FROM events
            WHERE created_at >= $1 AND created_at < $2
            GROUP BY month
            ORDER BY month ASC
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MonthlyEventCount::from).collect())
    }
}
