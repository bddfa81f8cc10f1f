//! HTTP Transport
//!
//! reqwest-backed [`ApiTransport`] that talks to the real backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, ApiResponse, ApiTransport};
use crate::config::ClientConfig;

pub struct HttpTransport {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(&config.api_base_url)?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport {
                path: base_url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            access_token: config.access_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Route appended verbatim to the base, including any base path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// An absolute http(s) URL with a host
fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let invalid = || ApiError::InvalidUrl(raw.to_string());
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid()),
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn request(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            path: request.path.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Transport {
            path: request.path.clone(),
            message: e.to_string(),
        })?;
        debug!("{} {} -> {}", request.method, request.path, status.as_u16());

        if !status.is_success() {
            // Error bodies are informational; keep raw text when it is not JSON
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: request.path,
                body,
            });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Decode {
                path: request.path.clone(),
                message: e.to_string(),
            })?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}
