//! Aggregate query rows

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MonthlyCountModel {
    pub month: i32,
    pub total_events: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TopEventModel {
    pub event_id: i64,
    pub total_users: i64,
}
