use crate::{
    api::{use_api_client, ApiClient, ApiError, LoginRequest},
    router::AppRoute,
    state::session::{use_session, SessionContext},
    utils::navigation,
};
use leptos::*;

/// Logs in and stores the issued token. Returns the route to land on.
pub async fn login_request(
    api: &ApiClient,
    session: &SessionContext,
    request: LoginRequest,
) -> Result<AppRoute, ApiError> {
    let token = api.login(&request).await?;
    session.sign_in(&token)?;
    log::info!("signed in as {}", request.email);
    Ok(AppRoute::DEFAULT_PROTECTED)
}

pub fn logout(session: &SessionContext) {
    session.sign_out();
    navigation::replace_location(AppRoute::Login.path());
}

pub fn use_login_action() -> Action<LoginRequest, Result<AppRoute, ApiError>> {
    let api = use_api_client();
    let session = use_session();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let session = session.clone();
        async move { login_request(&api, &session, payload).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use serde_json::json;

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "user@example.com".into(),
            password: "secret123".into(),
        }
    }

    #[tokio::test]
    async fn successful_login_stores_token_and_lands_on_dashboard() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/login")
                    .json_body(json!({ "email": "user@example.com", "password": "secret123" }));
                then.status(200)
                    .json_body(json!({ "token": "abc123", "status": "success" }));
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new(SessionStore::in_memory());
        let api = ApiClient::new_with_base_url(server.url("/api"), session.store.clone());

        let landing = login_request(&api, &session, credentials()).await.unwrap();

        assert_eq!(landing, AppRoute::Dashboard);
        assert_eq!(session.store.get().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());
        mock.assert_hits_async(1).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_login_leaves_session_absent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/login");
                then.status(401)
                    .json_body(json!({ "message": "bad credentials" }));
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new(SessionStore::in_memory());
        let api = ApiClient::new_with_base_url(server.url("/api"), session.store.clone());

        let err = login_request(&api, &session, credentials())
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::AuthRejected { status: 401 });
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(session.store.get().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_against_dead_server_reports_unreachable() {
        let runtime = create_runtime();
        let session = SessionContext::new(SessionStore::in_memory());
        let api = ApiClient::new_with_base_url("http://127.0.0.1:1/api", session.store.clone());

        let err = login_request(&api, &session, credentials())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unreachable(_)));
        assert!(err.to_string().starts_with("Server is down"));
        assert!(session.store.get().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_without_token_is_a_decode_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/login");
                then.status(200).json_body(json!({ "status": "ok" }));
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new(SessionStore::in_memory());
        let api = ApiClient::new_with_base_url(server.url("/api"), session.store.clone());

        let err = login_request(&api, &session, credentials())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!session.is_authenticated());
        runtime.dispose();
    }

    #[test]
    fn logout_clears_session_and_blocks_protected_routes() {
        use crate::components::guard::{resolve_navigation, NavigationDecision};

        let runtime = create_runtime();
        let session = SessionContext::new(SessionStore::in_memory());
        session.sign_in("abc123").unwrap();
        assert_eq!(
            resolve_navigation(AppRoute::Dashboard, session.is_authenticated()),
            NavigationDecision::Render
        );

        logout(&session);

        assert!(session.store.get().is_none());
        assert_eq!(
            resolve_navigation(AppRoute::Dashboard, session.is_authenticated()),
            NavigationDecision::RedirectToLogin
        );
        runtime.dispose();
    }
}
