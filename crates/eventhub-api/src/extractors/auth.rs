//! Authorization gate extractor
//!
//! Resolves the bearer token from the `Authorization` header and checks the
//! user's role against the set required by the route, before the handler runs.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use eventhub_common::AppError;
use eventhub_core::{Role, Snowflake, User};
use eventhub_service::{AuthService, AuthenticatedUser};

use crate::response::ApiError;
use crate::state::AppState;

/// Compile-time set of roles a route admits
pub trait RoleSet: Send + Sync + 'static {
    /// Admitted roles; empty admits any authenticated user
    const ROLES: &'static [Role];
}

/// Any authenticated user
#[derive(Debug, Clone, Copy)]
pub struct AnyRole;

impl RoleSet for AnyRole {
    const ROLES: &'static [Role] = &[];
}

#[derive(Debug, Clone, Copy)]
pub struct UserOrAdmin;

impl RoleSet for UserOrAdmin {
    const ROLES: &'static [Role] = &[Role::User, Role::Admin];
}

#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl RoleSet for AdminOnly {
    const ROLES: &'static [Role] = &[Role::Admin];
}

/// Caller that passed the gate for role set `R`
#[derive(Debug, Clone)]
pub struct Authorized<R: RoleSet> {
    identity: AuthenticatedUser,
    _roles: PhantomData<R>,
}

impl<R: RoleSet> Authorized<R> {
    pub fn user(&self) -> &User {
        &self.identity.user
    }

    pub fn user_id(&self) -> Snowflake {
        self.identity.id()
    }

    /// Identifier of the presented token
    pub fn token_id(&self) -> &str {
        &self.identity.token_id
    }
}

#[async_trait]
impl<S, R> FromRequestParts<S> for Authorized<R>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    R: RoleSet,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        let token = match &header {
            Ok(TypedHeader(Authorization(bearer))) => Some(bearer.token()),
            Err(rejection) if rejection.is_missing() => None,
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Malformed authorization header");
                return Err(AppError::InvalidToken.into());
            }
        };

        let app_state = AppState::from_ref(state);
        let identity = AuthService::new(app_state.service_context())
            .authorize(token, R::ROLES)
            .await?;

        Ok(Self {
            identity,
            _roles: PhantomData,
        })
    }
}
