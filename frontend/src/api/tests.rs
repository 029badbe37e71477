#![cfg(not(coverage))]

use super::*;
use crate::state::{
    page_data::{load_page, FetchState},
    session::SessionStore,
};
use httpmock::prelude::*;
use serde_json::json;

fn overview_json() -> serde_json::Value {
    json!({
        "totalUsers": 1200,
        "activeUsers": 300,
        "revenue": 245890,
        "growth": 12.5
    })
}

fn signed_in(server: &MockServer) -> (ApiClient, SessionStore) {
    let session = SessionStore::in_memory();
    session.set("abc123").unwrap();
    let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());
    (api, session)
}

#[tokio::test]
async fn get_json_sends_bearer_token_and_parses_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/overview")
                .header("authorization", "Bearer abc123");
            then.status(200).json_body(overview_json());
        })
        .await;
    let (api, _session) = signed_in(&server);

    let stats: OverviewStats = api.get_json(OVERVIEW).await.unwrap();

    assert_eq!(stats.total_users, 1200);
    assert_eq!(stats.active_users, 300);
    assert_eq!(stats.revenue, 245890.0);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([]));
        })
        .await;
    let api = ApiClient::new_with_base_url(server.url("/api/"), SessionStore::in_memory());

    let users: Vec<UserRecord> = api.get_json(USERS).await.unwrap();

    assert!(users.is_empty());
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(401).json_body(json!({ "message": "jwt expired" }));
        })
        .await;
    let (api, _session) = signed_in(&server);

    let err = api.get_json::<Vec<UserRecord>>(USERS).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn server_errors_carry_status_and_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/products");
            then.status(503)
                .json_body(json!({ "error": "maintenance window" }));
        })
        .await;
    let (api, _session) = signed_in(&server);

    let err = api.get_json::<Vec<Product>>(PRODUCTS).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::ServerError {
            status: 503,
            message: "maintenance window".into()
        }
    );
}

#[tokio::test]
async fn server_errors_without_body_use_status_reason() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/products");
            then.status(500).body("");
        })
        .await;
    let (api, _session) = signed_in(&server);

    let err = api.get_json::<Vec<Product>>(PRODUCTS).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::ServerError {
            status: 500,
            message: "Internal Server Error".into()
        }
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/analytics");
            then.status(200).body("not json");
        })
        .await;
    let (api, _session) = signed_in(&server);

    let err = api
        .get_json::<Vec<AnalyticsPoint>>(ANALYTICS)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn load_page_issues_exactly_one_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/dashboard");
            then.status(200).json_body(json!({
                "overview": overview_json(),
                "users": [{ "id": 1, "name": "Alice", "email": "alice@example.com", "joinDate": "2024-01-05", "status": "active" }],
                "analytics": [{ "date": "2024-01-01", "views": 10, "clicks": 4, "conversions": 1 }],
                "products": []
            }));
        })
        .await;
    let (api, session) = signed_in(&server);

    let state: FetchState<DashboardPayload> = load_page(&api, &session, DASHBOARD).await;

    let payload = state.data().expect("dashboard payload");
    assert_eq!(payload.users.len(), 1);
    assert_eq!(payload.analytics[0].views, 10);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn load_page_transport_error_settles_in_failure() {
    let session = SessionStore::in_memory();
    session.set("abc123").unwrap();
    let api = ApiClient::new_with_base_url("http://127.0.0.1:1/api", session.clone());

    let state: FetchState<OverviewStats> = load_page(&api, &session, OVERVIEW).await;

    assert!(!state.is_pending());
    assert!(matches!(state.error(), Some(ApiError::Unreachable(_))));
    assert_eq!(session.get().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn load_page_unauthorized_clears_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/overview");
            then.status(401);
        })
        .await;
    let (api, session) = signed_in(&server);

    let state: FetchState<OverviewStats> = load_page(&api, &session, OVERVIEW).await;

    assert_eq!(state, FetchState::Failure(ApiError::Unauthorized));
    assert!(session.get().is_none());
}

#[tokio::test]
async fn load_page_server_error_keeps_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/overview");
            then.status(500).json_body(json!({ "message": "db down" }));
        })
        .await;
    let (api, session) = signed_in(&server);

    let state: FetchState<OverviewStats> = load_page(&api, &session, OVERVIEW).await;

    assert!(matches!(
        state.error(),
        Some(ApiError::ServerError { status: 500, .. })
    ));
    assert!(session.get().is_some());
}
