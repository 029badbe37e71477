use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

/// Identifiers arrive as either numbers or strings depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    pub total_users: u64,
    pub active_users: u64,
    pub revenue: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub status: String,
}

impl UserRecord {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub sales: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsPoint {
    pub date: String,
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardPayload {
    pub overview: Option<OverviewStats>,
    pub users: Vec<UserRecord>,
    pub analytics: Vec<AnalyticsPoint>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Invalid email or password")]
    AuthRejected { status: u16 },
    #[error("Server is down. Try again later.")]
    Unreachable(String),
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Request failed ({status}): {message}")]
    ServerError { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    #[error("Could not save your session: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::AuthRejected { .. } => "AUTH_REJECTED",
            ApiError::Unreachable(_) => "UNREACHABLE",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::ServerError { .. } => "SERVER_ERROR",
            ApiError::Decode(_) => "DECODE_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthRejected { status } | ApiError::ServerError { status, .. } => {
                Some(*status)
            }
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Failures a user can reasonably retry from the page.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Unreachable(_) | ApiError::ServerError { .. } | ApiError::Decode(_)
        )
    }
}

impl From<crate::utils::storage::StorageError> for ApiError {
    fn from(err: crate::utils::storage::StorageError) -> Self {
        ApiError::Storage(err.to_string())
    }
}
