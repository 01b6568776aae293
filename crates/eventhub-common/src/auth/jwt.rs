//! JWT utilities for authentication
//!
//! Every issued token carries a unique `jti`. The token is only honoured while
//! that identifier sits in the owner's active token set, so a signed but
//! revoked token is rejected by the caller that checks the set.

use chrono::{DateTime, TimeDelta, Utc};
use eventhub_core::Snowflake;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Token identifier, tracked in the user's active token set
    pub jti: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<Snowflake>()
            .map_err(|_| AppError::InvalidToken)
    }
}

/// A freshly signed token together with its identifier
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service; `token_expiry` is in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Sign a new token for the user with a fresh identifier
    pub fn issue(&self, user_id: Snowflake) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = TimeDelta::try_seconds(self.token_expiry)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Token expiry out of range")))?;
        let token_id = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: user_id.to_string(),
            jti: token_id.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(IssuedToken {
            token,
            token_id,
            expires_at,
        })
    }

    /// Decode and validate signature and expiry.
    /// Any failure, including expiry, is reported as `InvalidToken`.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
