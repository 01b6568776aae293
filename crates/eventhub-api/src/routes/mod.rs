//! Route definitions

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{analytics, events, health, registrations, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(event_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::sign_up))
        .route("/users/signIn", post(users::sign_in))
        .route("/users/me", get(users::get_current_user))
        .route("/users/signOut", post(users::sign_out))
        .route("/users/signOutAll", post(users::sign_out_all))
}

/// Event, registration and analytics routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(events::list_events)
                .post(events::create_event)
                .put(events::update_event_without_id),
        )
        .route("/events/analytics", post(analytics::get_analytics))
        .route(
            "/events/:eventId",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/events/:eventId/register",
            post(registrations::register).delete(registrations::unregister),
        )
}
