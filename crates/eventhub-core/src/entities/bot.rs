//! Bot entity - a chat bot endpoint owned by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Channels a bot can be published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotPlatform {
    Webchat,
    Facebook,
    Whatsapp,
}

impl BotPlatform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Webchat => "webchat",
            Self::Facebook => "facebook",
            Self::Whatsapp => "whatsapp",
        }
    }
}

impl FromStr for BotPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "webchat" => Ok(Self::Webchat),
            "facebook" => Ok(Self::Facebook),
            "whatsapp" => Ok(Self::Whatsapp),
            other => Err(DomainError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// Bot entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    pub id: Snowflake,
    pub name: String,
    pub platforms: Vec<BotPlatform>,
    pub endpoint: String,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bot {
    pub const MIN_NAME_LENGTH: usize = 5;
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:3000/";

    /// Create a bot after validating its name; the endpoint starts at the default
    pub fn new(id: Snowflake, name: String, user_id: Snowflake) -> Result<Self, DomainError> {
        if name.trim().chars().count() < Self::MIN_NAME_LENGTH {
            return Err(DomainError::BotNameTooShort {
                min: Self::MIN_NAME_LENGTH,
            });
        }

        let now = Utc::now();
        Ok(Self {
            id,
            name,
            platforms: Vec::new(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Parse and attach platforms, ignoring duplicates
    pub fn with_platforms<'a, I>(mut self, platforms: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for raw in platforms {
            let platform = raw.parse::<BotPlatform>()?;
            if !self.platforms.contains(&platform) {
                self.platforms.push(platform);
            }
        }
        Ok(self)
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}
