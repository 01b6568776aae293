//! HTTP tests driven through the full router

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use eventhub_core::Role;
use integration_tests::{
    create_event_body, error_code, sign_up_body, unique_email, TestApp, TEST_PASSWORD,
};
use serde_json::json;

async fn create_event(app: &TestApp, token: &str, max_attendees: i32) -> String {
    let (status, body) = app
        .send(
            Method::POST,
            "/events",
            Some(token),
            Some(create_event_body("Rust Meetup", max_attendees)),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_str().unwrap().to_string()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = app.send(Method::GET, "/health/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"], "healthy");

    app.store.set_healthy(false);
    let (status, _) = app.send(Method::GET, "/health/ready", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_sign_up_and_sign_in_flow() {
    let app = TestApp::new();
    let email = unique_email();

    let (status, body) = app
        .send(
            Method::POST,
            "/users",
            None,
            Some(sign_up_body(&email, Role::User)),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "User created successfully");
    let user_id = body["userId"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(
            Method::POST,
            "/users/signIn",
            None,
            Some(json!({ "email": email, "password": TEST_PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "User logged in successfully");
    assert_eq!(body["userId"], user_id.as_str());
    assert_eq!(body["userName"], "Test");
    let token = body["accessToken"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(Method::GET, "/users/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["emailId"], email.as_str());
    assert_eq!(body["role"], "USER");
    assert!(body.get("password").is_none());

    let (status, body) = app
        .send(Method::POST, "/users/signOut", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revokedSessions"], 1);

    let (status, body) = app
        .send(Method::GET, "/users/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let app = TestApp::new();
    let email = unique_email();
    let body = sign_up_body(&email, Role::User);

    let (status, _) = app
        .send(Method::POST, "/users", None, Some(body.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send(Method::POST, "/users", None, Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "USER_ALREADY_EXISTS");
    assert_eq!(body["error"]["details"]["field"], "emailId");
}

#[tokio::test]
async fn test_sign_up_validation() {
    let app = TestApp::new();
    let mut body = sign_up_body("not-an-email", Role::User);
    body["emailId"] = json!("not-an-email");

    let (status, body) = app.send(Method::POST, "/users", None, Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_sign_in_errors() {
    let app = TestApp::new();
    let user = app.user(Role::User).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users/signIn",
            None,
            Some(json!({ "email": user.email })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "SIGN_IN_BAD_REQUEST");

    let (status, body) = app
        .send(Method::POST, "/users/signIn", None, None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "SIGN_IN_BAD_REQUEST");

    let (status, body) = app
        .send(
            Method::POST,
            "/users/signIn",
            None,
            Some(json!({ "email": user.email, "password": "Wrong0pass" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "SIGN_IN_FAIL");
}

// ============================================================================
// Gate
// ============================================================================

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/events", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "HEADERS_NOT_SET");
}

#[tokio::test]
async fn test_unknown_token_and_bad_scheme() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::GET, "/events", Some("garbage"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "USER_NOT_FOUND");

    let request = Request::builder()
        .method(Method::GET)
        .uri("/events")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send_request(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_user_cannot_reach_admin_routes() {
    let app = TestApp::new();
    let user = app.user(Role::User).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/events",
            user.bearer(),
            Some(create_event_body("Nope", 5)),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&body), "UNAUTHORIZED_ROLE");

    let (status, body) = app
        .send(Method::POST, "/events/analytics", user.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&body), "UNAUTHORIZED_ROLE");

    let (status, _) = app
        .send(Method::GET, "/events", user.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_event_crud() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;
    let event_id = create_event(&app, &admin.token, 25).await;
    let uri = format!("/events/{event_id}");

    let (status, body) = app.send(Method::GET, &uri, admin.bearer(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventName"], "Rust Meetup");
    assert_eq!(body["maxAttendees"], 25);
    assert_eq!(body["message"], "Event fetched successfully");

    let (status, body) = app
        .send(
            Method::PUT,
            &uri,
            admin.bearer(),
            Some(json!({ "eventLocation": "Lisbon" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["eventLocation"], "Lisbon");
    assert_eq!(body["eventName"], "Rust Meetup");

    let (status, body) = app.send(Method::GET, "/events", admin.bearer(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .send(Method::DELETE, &uri, admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], event_id.as_str());

    let (status, body) = app.send(Method::GET, &uri, admin.bearer(), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "EVENT_NOT_FOUND");
}

#[tokio::test]
async fn test_list_events_by_location() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;
    create_event(&app, &admin.token, 5).await;

    let (status, body) = app
        .send(Method::GET, "/events?location=Berlin", admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .send(Method::GET, "/events?location=Oslo", admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["events"].as_array().unwrap().is_empty());

    let (status, body) = app
        .send(Method::GET, "/events?date=someday", admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_create_event_validation() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;

    let mut body = create_event_body("Bad capacity", 5);
    body["maxAttendees"] = json!(0);
    let (status, response) = app
        .send(Method::POST, "/events", admin.bearer(), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "VALIDATION_ERROR");

    let mut body = create_event_body("Bad date", 5);
    body["eventDate"] = json!("next tuesday");
    let (status, response) = app
        .send(Method::POST, "/events", admin.bearer(), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&response), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_without_event_id() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;
    let before = app.store.event_calls();

    let (status, body) = app
        .send(
            Method::PUT,
            "/events",
            admin.bearer(),
            Some(json!({ "eventName": "Renamed" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "UPDATE_EVENT_BAD_REQUEST");
    assert_eq!(app.store.event_calls(), before);
}

#[tokio::test]
async fn test_invalid_event_id_in_path() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;

    let (status, body) = app
        .send(Method::GET, "/events/not-a-number", admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_PATH_PARAMETER");

    let (status, body) = app
        .send(Method::DELETE, "/events/42", admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "EVENT_NOT_FOUND");
}

// ============================================================================
// Registrations
// ============================================================================

#[tokio::test]
async fn test_registration_capacity() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;
    let event_id = create_event(&app, &admin.token, 2).await;
    let uri = format!("/events/{event_id}/register");

    let first = app.user(Role::User).await;
    let second = app.user(Role::User).await;
    let third = app.user(Role::User).await;

    let (status, body) = app.send(Method::POST, &uri, first.bearer(), None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Registered for event successfully");

    let (status, body) = app.send(Method::POST, &uri, first.bearer(), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "ALREADY_REGISTERED");

    let (status, _) = app.send(Method::POST, &uri, second.bearer(), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send(Method::POST, &uri, third.bearer(), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "EVENT_FULL");

    let (status, body) = app
        .send(Method::DELETE, &uri, first.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unregistered from event successfully");

    let (status, _) = app.send(Method::POST, &uri, third.bearer(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.store.registrations_for(event_id.parse().unwrap()), 2);
}

#[tokio::test]
async fn test_register_for_unknown_event() {
    let app = TestApp::new();
    let user = app.user(Role::User).await;

    let (status, body) = app
        .send(Method::POST, "/events/777/register", user.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "EVENT_NOT_FOUND");
}

// ============================================================================
// Analytics
// ============================================================================

#[tokio::test]
async fn test_analytics_for_admin() {
    let app = TestApp::new();
    let admin = app.user(Role::Admin).await;
    let event_id = create_event(&app, &admin.token, 10).await;

    let user = app.user(Role::User).await;
    let (status, _) = app
        .send(
            Method::POST,
            &format!("/events/{event_id}/register"),
            user.bearer(),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(Method::POST, "/events/analytics", admin.bearer(), None)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Analytics fetched successfully");

    let months = body["totalEvents"].as_array().unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["totalEvents"], 1);

    let top = body["topEvents"].as_array().unwrap();
    assert_eq!(top[0]["eventId"], event_id.as_str());
    assert_eq!(top[0]["totalUsers"], 1);
}
