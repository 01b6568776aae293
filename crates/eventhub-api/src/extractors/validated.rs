//! JSON body extractors with `validator` checks
//!
//! Any body that cannot be read as the target type, and any body that fails
//! its `Validate` rules, is rejected as `VALIDATION_ERROR`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Deserialized and validated JSON body
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn body_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.body_text()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.body_text()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.body_text()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
        other => ApiError::invalid_body(other.body_text()),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Like [`ValidatedJson`], but a request without a body yields `None`.
/// Used by partial updates where an empty body means "change nothing".
#[derive(Debug, Clone)]
pub struct OptionalValidatedJson<T>(pub Option<T>);

/// Whether the request announces a non-empty body
fn has_body(req: &Request) -> bool {
    let headers = req.headers();

    if headers.contains_key(header::TRANSFER_ENCODING) {
        return true;
    }

    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .is_some_and(|len| len > 0)
}

#[async_trait]
impl<S, T> FromRequest<S> for OptionalValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_body(&req) {
            return Ok(Self(None));
        }

        let ValidatedJson(value) = ValidatedJson::<T>::from_request(req, state).await?;
        Ok(Self(Some(value)))
    }
}
