//! Aggregated analytics rows

use chrono::{DateTime, TimeZone, Utc};

use crate::value_objects::Snowflake;

/// Number of events created in a calendar month (1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyEventCount {
    pub month: u32,
    pub total_events: i64,
}

/// Number of registrations held by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRegistrationCount {
    pub event_id: Snowflake,
    pub total_users: i64,
}

/// Analytics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventAnalytics {
    pub total_events: Vec<MonthlyEventCount>,
    pub top_events: Vec<EventRegistrationCount>,
}

impl EventAnalytics {
    /// Number of most-registered events reported
    pub const TOP_EVENTS_LIMIT: usize = 3;

    /// Build a snapshot with months ascending and the busiest events first.
    /// Ties on registration count fall back to ascending event id.
    pub fn new(
        mut total_events: Vec<MonthlyEventCount>,
        mut top_events: Vec<EventRegistrationCount>,
    ) -> Self {
        total_events.retain(|m| m.total_events > 0);
        total_events.sort_by_key(|m| m.month);

        top_events.sort_by(|a, b| {
            b.total_users
                .cmp(&a.total_users)
                .then_with(|| a.event_id.cmp(&b.event_id))
        });
        top_events.truncate(Self::TOP_EVENTS_LIMIT);

        Self {
            total_events,
            top_events,
        }
    }
}

/// Half-open UTC window `[Jan 1 year, Jan 1 year+1)`
pub fn year_bounds(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let end = Utc.with_ymd_and_hms(year.checked_add(1)?, 1, 1, 0, 0, 0).single()?;
    Some((start, end))
}
