use leptos::*;
use reqwest::{header, Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session::SessionStore};

/// HTTP client for the dashboard API. Attaches the session token as a bearer
/// credential and folds every outcome into `Result<T, ApiError>`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn url_for(&self, path: &str) -> String {
        let base = self.resolved_base_url().await;
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a request without interpreting the status. Transport failures
    /// become `Unreachable`.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path).await;
        let mut builder = self.client.request(method.clone(), &url);
        if let Some(token) = self.session.get() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.send().await.map_err(|err| {
            log::error!("{} {} unreachable: {}", method, url, err);
            ApiError::Unreachable(err.to_string())
        })
    }

    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method.clone(), path, body).await?;
        let status = response.status();
        if status.is_success() {
            return decode_json(response).await;
        }
        let error = error_from_response(status, response).await;
        log::warn!("{} {} failed: {} ({})", method, path, error, error.code());
        Err(error)
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, None).await
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }
    let body = response.text().await.unwrap_or_default();
    ApiError::ServerError {
        status: status.as_u16(),
        message: server_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        }),
    }
}

/// Pulls a human-readable message out of an error body, if the server sent one.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

pub fn provide_api_client(client: ApiClient) -> ApiClient {
    provide_context(client.clone());
    client
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        let session = use_context::<crate::state::session::SessionContext>()
            .map(|ctx| ctx.store)
            .unwrap_or_else(SessionStore::browser);
        ApiClient::new(session)
    })
}
