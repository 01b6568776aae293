//! Value objects - immutable types that represent domain concepts

mod event_date;
mod role;
mod snowflake;

pub use event_date::parse_event_date;
pub use role::{Role, RoleParseError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
