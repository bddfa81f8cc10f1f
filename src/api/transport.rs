use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::error::ApiResult;

/// A single backend call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, as produced by the endpoint registry
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(method: Method, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body),
        }
    }

    /// POST, PUT, PATCH and DELETE
    pub fn is_mutating(&self) -> bool {
        self.method == Method::POST
            || self.method == Method::PUT
            || self.method == Method::PATCH
            || self.method == Method::DELETE
    }
}

/// A successful (2xx) backend answer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded body; `Value::Null` when the backend sent nothing
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

/// Seam between the client logic and the wire. Non-2xx answers are returned
/// as [`crate::api::ApiError::Status`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn request(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}
