//! Test helpers
//!
//! Builds a service context and a router over a [`MemoryStore`] and drives
//! requests through the router without binding a socket.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use eventhub_api::{create_app, AppState};
use eventhub_common::{AppConfig, JwtService};
use eventhub_core::{Role, Snowflake, SnowflakeGenerator};
use eventhub_service::{ServiceContext, ServiceContextBuilder, UserService};
use eventhub_service::dto::SignInRequest;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::fixtures::{sign_up_request, unique_email, TEST_PASSWORD};
use crate::memory::MemoryStore;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn test_config() -> AppConfig {
    let vars: HashMap<&str, &str> = [
        ("APP_PORT", "3500"),
        ("APP_ENV", "test"),
        ("JWT_SECRET", TEST_JWT_SECRET),
        ("DATABASE_RUN_MIGRATIONS", "false"),
    ]
    .into_iter()
    .collect();

    AppConfig::from_source(|key| vars.get(key).map(|v| (*v).to_string()))
        .expect("test config should load")
}

/// Service context wired to the given store
pub fn test_context(store: &MemoryStore) -> ServiceContext {
    let store = Arc::new(store.clone());
    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .token_repo(store.clone())
        .event_repo(store.clone())
        .registration_repo(store.clone())
        .health_check(store)
        .jwt_service(Arc::new(JwtService::new(TEST_JWT_SECRET, 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .expect("context should build")
}

/// Signed-in account
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Snowflake,
    pub email: String,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> Option<&str> {
        Some(&self.token)
    }
}

/// Sign up a fresh account with the given role and sign it in
pub async fn sign_up_and_in(ctx: &ServiceContext, role: Role) -> TestUser {
    let email = unique_email();
    let service = UserService::new(ctx);

    service
        .sign_up(sign_up_request(&email, role))
        .await
        .expect("sign up should succeed");

    let signed_in = service
        .sign_in(SignInRequest {
            email: Some(email.clone()),
            password: Some(TEST_PASSWORD.to_string()),
        })
        .await
        .expect("sign in should succeed");

    TestUser {
        id: Snowflake::parse(&signed_in.user_id).expect("user id should parse"),
        email,
        token: signed_in.access_token,
    }
}

/// Router over an in-memory store
pub struct TestApp {
    pub store: MemoryStore,
    pub router: Router,
    state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let state = AppState::new(test_context(&store), test_config());
        let router = create_app(state.clone());
        Self {
            store,
            router,
            state,
        }
    }

    /// Context shared with the router
    pub fn context(&self) -> &ServiceContext {
        self.state.service_context()
    }

    pub async fn user(&self, role: Role) -> TestUser {
        sign_up_and_in(self.context(), role).await
    }

    /// Send one request and return the status with the decoded JSON body
    /// (`Value::Null` for an empty body)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => {
                let body = body.to_string();
                builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::CONTENT_LENGTH, body.len())
                    .body(Body::from(body))
            }
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Error code from an error response body
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
