//! Authentication service
//!
//! Issues and resolves bearer tokens, verifies credentials and enforces the
//! role gate that protected routes pass through.

use eventhub_common::{verify_password, AppError, IssuedToken};
use eventhub_core::{Role, Snowflake, User};
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// Identifier of the token that authenticated this request
    pub token_id: String,
}

impl AuthenticatedUser {
    #[inline]
    pub fn id(&self) -> Snowflake {
        self.user.id
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign a token for the user and add its identifier to the active set
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn issue_token(&self, user: &User) -> ServiceResult<IssuedToken> {
        let issued = self.ctx.jwt_service().issue(user.id)?;

        self.ctx
            .token_repo()
            .add(user.id, &issued.token_id, issued.expires_at)
            .await?;

        debug!(token_id = %issued.token_id, "Token issued");
        Ok(issued)
    }

    /// Resolve a bearer token to its user.
    ///
    /// Fails with `InvalidToken` when the signature or expiry is bad, the
    /// identifier is no longer in the user's set, or the user is gone.
    #[instrument(skip(self, token))]
    pub async fn resolve_token(&self, token: &str) -> ServiceResult<AuthenticatedUser> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let user_id = claims.user_id()?;

        if !self.ctx.token_repo().contains(user_id, &claims.jti).await? {
            debug!(user_id = %user_id, "Token not in active set");
            return Err(AppError::InvalidToken.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        Ok(AuthenticatedUser {
            user,
            token_id: claims.jti,
        })
    }

    /// Check an email/password pair. Unknown email and wrong password are
    /// reported identically.
    #[instrument(skip(self, password))]
    pub async fn verify_credentials(&self, email: &str, password: &str) -> ServiceResult<User> {
        let Some(user) = self.ctx.user_repo().find_by_email(email).await? else {
            warn!("Sign in failed: unknown email");
            return Err(AppError::InvalidCredentials.into());
        };

        let hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Sign in failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(password, &hash)? {
            warn!(user_id = %user.id, "Sign in failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Role gate: resolve the presented token and require a role from `required`.
    ///
    /// `None` means no authorization header was sent. An empty `required`
    /// admits any authenticated user.
    #[instrument(skip(self, token))]
    pub async fn authorize(
        &self,
        token: Option<&str>,
        required: &[Role],
    ) -> ServiceResult<AuthenticatedUser> {
        let token = token.ok_or(ServiceError::App(AppError::MissingAuth))?;
        let identity = self.resolve_token(token).await?;

        if !identity.role().satisfies(required) {
            warn!(
                user_id = %identity.id(),
                role = %identity.role(),
                "Role not permitted for route"
            );
            return Err(AppError::UnauthorizedRole.into());
        }

        Ok(identity)
    }

    /// Remove one token from the user's active set
    #[instrument(skip(self, token_id))]
    pub async fn revoke_token(&self, user_id: Snowflake, token_id: &str) -> ServiceResult<bool> {
        let removed = self.ctx.token_repo().revoke(user_id, token_id).await?;
        info!(removed, "Token revoked");
        Ok(removed)
    }

    /// Empty the user's active token set
    #[instrument(skip(self))]
    pub async fn revoke_all(&self, user_id: Snowflake) -> ServiceResult<u64> {
        let removed = self.ctx.token_repo().revoke_all(user_id).await?;
        info!(removed, "All tokens revoked");
        Ok(removed)
    }
}
