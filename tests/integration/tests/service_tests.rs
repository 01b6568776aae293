//! Service-level tests against the in-memory store

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use eventhub_core::{
    Event, EventRepository, Registration, RegistrationRepository, Role, Snowflake,
};
use eventhub_service::dto::{EventListQuery, SignInRequest, UpdateEventRequest};
use eventhub_service::{
    AnalyticsService, AuthService, EventService, RegistrationService, UserService,
};
use integration_tests::{
    create_event_request, sign_up_and_in, sign_up_request, test_context, unique_email,
    MemoryStore, TEST_PASSWORD,
};

async fn create_event(ctx: &eventhub_service::ServiceContext, admin: Snowflake, cap: i32) -> Snowflake {
    let created = EventService::new(ctx)
        .create_event(admin, create_event_request("Meetup", cap))
        .await
        .unwrap();
    Snowflake::parse(&created.id).unwrap()
}

// ============================================================================
// Users and tokens
// ============================================================================

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let service = UserService::new(&ctx);
    let email = unique_email();

    service
        .sign_up(sign_up_request(&email, Role::User))
        .await
        .unwrap();
    let err = service
        .sign_up(sign_up_request(&email, Role::User))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "USER_ALREADY_EXISTS");
    assert_eq!(err.details().unwrap()["field"], "emailId");
}

#[tokio::test]
async fn test_sign_in_failures() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let user = sign_up_and_in(&ctx, Role::User).await;
    let service = UserService::new(&ctx);

    let err = service
        .sign_in(SignInRequest {
            email: Some(user.email.clone()),
            password: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "SIGN_IN_BAD_REQUEST");
    assert_eq!(err.status_code(), 400);

    let err = service
        .sign_in(SignInRequest {
            email: Some(user.email.clone()),
            password: Some("Wrong0password".to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "SIGN_IN_FAIL");

    let err = service
        .sign_in(SignInRequest {
            email: Some("nobody@example.com".to_string()),
            password: Some(TEST_PASSWORD.to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "SIGN_IN_FAIL");
}

#[tokio::test]
async fn test_issued_token_resolves_until_revoked() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let user = sign_up_and_in(&ctx, Role::User).await;
    let auth = AuthService::new(&ctx);

    let identity = auth.resolve_token(&user.token).await.unwrap();
    assert_eq!(identity.id(), user.id);
    assert_eq!(identity.role(), Role::User);

    UserService::new(&ctx)
        .sign_out(user.id, &identity.token_id)
        .await
        .unwrap();

    let err = auth.resolve_token(&user.token).await.unwrap_err();
    assert_eq!(err.error_code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_never_issued_token_rejected() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let user = sign_up_and_in(&ctx, Role::User).await;

    // Correctly signed but never added to the active set
    let forged = ctx.jwt_service().issue(user.id).unwrap();
    let err = AuthService::new(&ctx)
        .resolve_token(&forged.token)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "USER_NOT_FOUND");

    let err = AuthService::new(&ctx)
        .resolve_token("not-a-jwt")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_profile_of_unknown_user() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);

    let err = UserService::new(&ctx)
        .get_profile(Snowflake::new(424_242))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.error_code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_any_non_empty_password_accepted() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let service = UserService::new(&ctx);
    let long = "x".repeat(120);

    for password in ["lettersonly", long.as_str()] {
        let email = unique_email();
        let mut request = sign_up_request(&email, Role::User);
        request.password = password.to_string();
        service.sign_up(request).await.unwrap();

        let signed_in = service
            .sign_in(SignInRequest {
                email: Some(email),
                password: Some(password.to_string()),
            })
            .await
            .unwrap();
        assert!(!signed_in.access_token.is_empty());
    }
}

#[tokio::test]
async fn test_sign_out_all_revokes_every_session() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let user = sign_up_and_in(&ctx, Role::User).await;

    let second = UserService::new(&ctx)
        .sign_in(SignInRequest {
            email: Some(user.email.clone()),
            password: Some(TEST_PASSWORD.to_string()),
        })
        .await
        .unwrap();
    assert_eq!(store.active_tokens(user.id), 2);

    let response = UserService::new(&ctx).sign_out_all(user.id).await.unwrap();
    assert_eq!(response.revoked_sessions, 2);
    assert_eq!(store.active_tokens(user.id), 0);

    let auth = AuthService::new(&ctx);
    assert!(auth.resolve_token(&user.token).await.is_err());
    assert!(auth.resolve_token(&second.access_token).await.is_err());
}

#[tokio::test]
async fn test_role_gate() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let user = sign_up_and_in(&ctx, Role::User).await;
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let auth = AuthService::new(&ctx);

    let err = auth.authorize(None, &[Role::Admin]).await.unwrap_err();
    assert_eq!(err.error_code(), "HEADERS_NOT_SET");
    assert_eq!(err.status_code(), 400);

    let err = auth
        .authorize(user.bearer(), &[Role::Admin])
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNAUTHORIZED_ROLE");
    assert_eq!(err.status_code(), 403);

    assert!(auth.authorize(user.bearer(), &[]).await.is_ok());
    assert!(auth
        .authorize(user.bearer(), &[Role::User, Role::Admin])
        .await
        .is_ok());
    assert_eq!(
        auth.authorize(admin.bearer(), &[Role::Admin])
            .await
            .unwrap()
            .id(),
        admin.id
    );
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_event_lifecycle() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let service = EventService::new(&ctx);

    let event_id = create_event(&ctx, admin.id, 10).await;
    let event = service.get_event(event_id).await.unwrap();
    assert_eq!(event.event_name, "Meetup");
    assert_eq!(event.max_attendees, 10);
    assert_eq!(event.created_by, admin.id.to_string());

    let updated = service
        .update_event(
            Some(event_id),
            UpdateEventRequest {
                event_location: Some("Lisbon".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.event_location, "Lisbon");
    assert_eq!(updated.event_name, "Meetup");

    let deleted = service.delete_event(event_id).await.unwrap();
    assert_eq!(deleted.id, event_id.to_string());

    let err = service.get_event(event_id).await.unwrap_err();
    assert_eq!(err.error_code(), "EVENT_NOT_FOUND");
}

#[tokio::test]
async fn test_list_events_filters() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let service = EventService::new(&ctx);

    create_event(&ctx, admin.id, 5).await;
    let mut request = create_event_request("Elsewhere", 5);
    request.event_location = "Paris".to_string();
    request.event_date = "2030-07-01".to_string();
    service.create_event(admin.id, request).await.unwrap();

    let all = service.list_events(EventListQuery::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let paris = service
        .list_events(EventListQuery {
            location: Some("Paris".to_string()),
            date: None,
        })
        .await
        .unwrap();
    assert_eq!(paris.len(), 1);
    assert_eq!(paris[0].event_name, "Elsewhere");

    let by_date = service
        .list_events(EventListQuery {
            location: None,
            date: Some("2030-06-01T18:00:00Z".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].event_name, "Meetup");

    let err = service
        .list_events(EventListQuery {
            location: None,
            date: Some("tomorrow".to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_update_without_id_never_reaches_store() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let before = store.event_calls();

    let err = EventService::new(&ctx)
        .update_event(
            None,
            UpdateEventRequest {
                event_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "UPDATE_EVENT_BAD_REQUEST");
    assert_eq!(err.status_code(), 400);
    assert_eq!(store.event_calls(), before);
}

#[tokio::test]
async fn test_empty_update_leaves_event_unchanged() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 4).await;

    let service = EventService::new(&ctx);
    let before = service.get_event(event_id).await.unwrap();
    let after = service
        .update_event(Some(event_id), UpdateEventRequest::default())
        .await
        .unwrap();

    assert_eq!(after.updated_at, before.updated_at);
    assert_eq!(after.event_name, before.event_name);
}

#[tokio::test]
async fn test_delete_unknown_event() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);

    let err = EventService::new(&ctx)
        .delete_event(Snowflake::new(424_242))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "EVENT_NOT_FOUND");
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_delete_removes_registrations() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 4).await;

    RegistrationService::new(&ctx)
        .register(admin.id, event_id)
        .await
        .unwrap();
    assert_eq!(store.registrations_for(event_id), 1);

    EventService::new(&ctx).delete_event(event_id).await.unwrap();
    assert_eq!(store.registrations_for(event_id), 0);
}

// ============================================================================
// Registrations
// ============================================================================

#[tokio::test]
async fn test_capacity_enforced() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 2).await;
    let service = RegistrationService::new(&ctx);

    service.register(Snowflake::new(11), event_id).await.unwrap();
    service.register(Snowflake::new(12), event_id).await.unwrap();

    let err = service
        .register(Snowflake::new(13), event_id)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "EVENT_FULL");
    assert_eq!(err.status_code(), 400);
    assert_eq!(store.registrations_for(event_id), 2);
}

#[tokio::test]
async fn test_unregister_frees_a_seat() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 1).await;
    let service = RegistrationService::new(&ctx);

    service.register(Snowflake::new(21), event_id).await.unwrap();
    assert!(service.register(Snowflake::new(22), event_id).await.is_err());

    service
        .unregister(Snowflake::new(21), event_id)
        .await
        .unwrap();
    service.register(Snowflake::new(22), event_id).await.unwrap();
    assert_eq!(store.registrations_for(event_id), 1);
}

#[tokio::test]
async fn test_unregister_without_registration_succeeds() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 1).await;

    let response = RegistrationService::new(&ctx)
        .unregister(Snowflake::new(31), event_id)
        .await
        .unwrap();
    assert_eq!(response.message, "Unregistered from event successfully");
}

#[tokio::test]
async fn test_register_twice_conflicts() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 5).await;
    let service = RegistrationService::new(&ctx);

    service.register(admin.id, event_id).await.unwrap();
    let err = service.register(admin.id, event_id).await.unwrap_err();
    assert_eq!(err.error_code(), "ALREADY_REGISTERED");
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_register_unknown_event() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);

    let err = RegistrationService::new(&ctx)
        .register(Snowflake::new(1), Snowflake::new(999))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "EVENT_NOT_FOUND");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_respect_capacity() {
    let store = MemoryStore::new();
    let ctx = Arc::new(test_context(&store));
    let admin = sign_up_and_in(&ctx, Role::Admin).await;
    let event_id = create_event(&ctx, admin.id, 3).await;

    let tasks = (0..10).map(|i| {
        let ctx = Arc::clone(&ctx);
        tokio::spawn(async move {
            RegistrationService::new(&ctx)
                .register(Snowflake::new(100 + i), event_id)
                .await
        })
    });

    let results = futures::future::join_all(tasks).await;
    let accepted = results
        .into_iter()
        .map(|joined| joined.unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(accepted, 3);
    assert_eq!(store.registrations_for(event_id), 3);
}

// ============================================================================
// Analytics
// ============================================================================

fn event_created_at(id: i64, year: i32, month: u32) -> Event {
    let mut event = Event::new(
        Snowflake::new(id),
        format!("Event {id}"),
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        "Berlin".to_string(),
        Snowflake::new(1),
    );
    event.created_at = Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap();
    event.updated_at = event.created_at;
    event
}

#[tokio::test]
async fn test_monthly_counts_for_year() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);

    for (id, year, month) in [(1, 2024, 1), (2, 2024, 1), (3, 2024, 3), (4, 2023, 1)] {
        EventRepository::create(&store, &event_created_at(id, year, month))
            .await
            .unwrap();
    }

    let analytics = AnalyticsService::new(&ctx)
        .get_analytics_for_year(2024)
        .await
        .unwrap();

    let months: Vec<(u32, i64)> = analytics
        .total_events
        .iter()
        .map(|m| (m.month, m.total_events))
        .collect();
    assert_eq!(months, vec![(1, 2), (3, 1)]);
    assert_eq!(analytics.message, "Analytics fetched successfully");
}

#[tokio::test]
async fn test_top_events_ordering() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);

    for id in 1..=3 {
        EventRepository::create(&store, &event_created_at(id, 2024, 2))
            .await
            .unwrap();
    }

    let mut next_id = 1000;
    for (event_id, attendees) in [(1, 1), (2, 5), (3, 3)] {
        for _ in 0..attendees {
            next_id += 1;
            let registration = Registration::new(
                Snowflake::new(next_id),
                Snowflake::new(event_id),
                Snowflake::new(next_id),
            );
            assert!(store.create_within_capacity(&registration).await.unwrap());
        }
    }

    let analytics = AnalyticsService::new(&ctx)
        .get_analytics_for_year(2024)
        .await
        .unwrap();

    let top: Vec<(String, i64)> = analytics
        .top_events
        .iter()
        .map(|t| (t.event_id.clone(), t.total_users))
        .collect();
    assert_eq!(
        top,
        vec![
            ("2".to_string(), 5),
            ("3".to_string(), 3),
            ("1".to_string(), 1)
        ]
    );
}

#[tokio::test]
async fn test_analytics_empty() {
    let store = MemoryStore::new();
    let ctx = test_context(&store);

    let analytics = AnalyticsService::new(&ctx).get_analytics().await.unwrap();
    assert!(analytics.total_events.is_empty());
    assert!(analytics.top_events.is_empty());
}
