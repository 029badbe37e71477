use reqwest::Method;

use super::{
    client::{decode_json, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
    LOGIN,
};

impl ApiClient {
    /// Exchanges credentials for a session token. Any non-2xx answer is reported
    /// as `AuthRejected`, whatever the server's reason. The token is returned,
    /// not stored; persisting it is the caller's job.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response = self.send(Method::POST, LOGIN, Some(request)).await?;
        let status = response.status();
        if !status.is_success() {
            log::info!("login rejected with status {}", status);
            return Err(ApiError::AuthRejected {
                status: status.as_u16(),
            });
        }
        let body: LoginResponse = decode_json(response).await?;
        body.token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiError::Decode("login response did not include a token".into()))
    }
}
