//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use eventhub_core::Snowflake;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract path parameters, rejecting with `INVALID_PATH_PARAMETER`
#[derive(Debug, Clone)]
pub struct SnowflakePath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for SnowflakePath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(SnowflakePath(inner))
    }
}

/// Path parameters with eventId
#[derive(Debug, serde::Deserialize)]
pub struct EventIdPath {
    #[serde(rename = "eventId")]
    pub event_id: String,
}

impl EventIdPath {
    /// Parse eventId as Snowflake
    pub fn event_id(&self) -> Result<Snowflake, ApiError> {
        self.event_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid eventId format"))
    }
}
