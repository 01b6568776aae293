//! Aggregate row mappers

use eventhub_core::{EventRegistrationCount, MonthlyEventCount, Snowflake};

use crate::models::{MonthlyCountModel, TopEventModel};

impl From<MonthlyCountModel> for MonthlyEventCount {
    fn from(model: MonthlyCountModel) -> Self {
        MonthlyEventCount {
            month: u32::try_from(model.month).unwrap_or_default(),
            total_events: model.total_events,
        }
    }
}

impl From<TopEventModel> for EventRegistrationCount {
    fn from(model: TopEventModel) -> Self {
        EventRegistrationCount {
            event_id: Snowflake::new(model.event_id),
            total_users: model.total_users,
        }
    }
}
