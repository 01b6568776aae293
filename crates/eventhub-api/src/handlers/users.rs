//! User handlers
//!
//! Endpoints for sign-up, sign-in, profile and sign-out.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use eventhub_service::dto::{
    SignInRequest, SignInResponse, SignOutResponse, SignUpRequest, SignUpResponse,
    UserProfileResponse, WithMessage,
};
use eventhub_service::UserService;

use crate::extractors::{AnyRole, Authorized, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create an account
///
/// POST /users
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignUpRequest>,
) -> ApiResult<Json<SignUpResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.sign_up(request).await?;
    Ok(Json(response))
}

/// Sign in with email and password
///
/// POST /users/signIn
///
/// An unreadable body is treated like one with no credentials.
pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<Json<SignInResponse>> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let service = UserService::new(state.service_context());
    let response = service.sign_in(request).await?;
    Ok(Json(response))
}

/// Profile of the signed-in user
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: Authorized<AnyRole>,
) -> ApiResult<Json<WithMessage<UserProfileResponse>>> {
    let service = UserService::new(state.service_context());
    let profile = service.get_profile(auth.user_id()).await?;
    Ok(Json(WithMessage::new(profile, "User fetched successfully")))
}

/// Revoke the presented token
///
/// POST /users/signOut
pub async fn sign_out(
    State(state): State<AppState>,
    auth: Authorized<AnyRole>,
) -> ApiResult<Json<SignOutResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.sign_out(auth.user_id(), auth.token_id()).await?;
    Ok(Json(response))
}

/// Revoke every session of the signed-in user
///
/// POST /users/signOutAll
pub async fn sign_out_all(
    State(state): State<AppState>,
    auth: Authorized<AnyRole>,
) -> ApiResult<Json<SignOutResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.sign_out_all(auth.user_id()).await?;
    Ok(Json(response))
}
