//! User service
//!
//! Handles sign-up, sign-in, profile lookup and sign-out.

use eventhub_common::{hash_password, AppError};
use eventhub_core::{DomainError, Snowflake, User};
use tracing::{info, instrument};

use crate::dto::{
    SignInRequest, SignInResponse, SignOutResponse, SignUpRequest, SignUpResponse,
    UserProfileResponse,
};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account. The role defaults to `USER`.
    #[instrument(skip(self, request), fields(email = %request.email_id))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<SignUpResponse> {
        let password_hash = hash_password(&request.password)?;

        let user = User::new(
            self.ctx.generate_id(),
            request.first_name,
            request.last_name,
            request.email_id,
            request.plan_type,
            request.mobile_no,
        )
        .with_role(request.role.unwrap_or_default());

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(SignUpResponse::new(user.id.to_string()))
    }

    /// Verify credentials and issue a bearer token
    #[instrument(skip(self, request))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<SignInResponse> {
        let (email, password) = match (request.email, request.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(AppError::MissingCredentials.into()),
        };

        let auth = AuthService::new(self.ctx);
        let user = auth.verify_credentials(&email, &password).await?;
        let issued = auth.issue_token(&user).await?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(SignInResponse {
            message: "User logged in successfully".to_string(),
            access_token: issued.token,
            user_id: user.id.to_string(),
            user_name: user.first_name,
            email: user.email,
        })
    }

    /// Profile of the given user
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<UserProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserProfileResponse::from(&user))
    }

    /// Revoke the token that authenticated this request
    #[instrument(skip(self, token_id))]
    pub async fn sign_out(
        &self,
        user_id: Snowflake,
        token_id: &str,
    ) -> ServiceResult<SignOutResponse> {
        let removed = AuthService::new(self.ctx)
            .revoke_token(user_id, token_id)
            .await?;

        Ok(SignOutResponse {
            revoked_sessions: u64::from(removed),
            message: "User logged out successfully".to_string(),
        })
    }

    /// Revoke every active session of the user
    #[instrument(skip(self))]
    pub async fn sign_out_all(&self, user_id: Snowflake) -> ServiceResult<SignOutResponse> {
        let removed = AuthService::new(self.ctx).revoke_all(user_id).await?;

        Ok(SignOutResponse {
            revoked_sessions: removed,
            message: "User logged out from all sessions".to_string(),
        })
    }
}
