//! Shared test utilities: a scripted backend standing in for the HTTP transport.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};

use chemisttasker::api::{ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, ApiTransport};

/// Answers requests from per-path scripts. An unscripted path answers 404,
/// like a route the backend does not have.
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<String, VecDeque<ApiResult<ApiResponse>>>>,
    calls: Mutex<Vec<String>>,
    /// When set, every request waits for a permit before answering
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Hold every answer until the returned semaphore hands out a permit
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let mut transport = Self::new();
        transport.gate = Some(gate.clone());
        (transport, gate)
    }

    pub async fn ok(&self, path: &str, body: Value) {
        self.push(path, Ok(ApiResponse::ok(body))).await;
    }

    pub async fn status(&self, path: &str, status: u16) {
        self.push(
            path,
            Err(ApiError::Status {
                status,
                path: path.to_string(),
                body: Value::Null,
            }),
        )
        .await;
    }

    pub async fn transport_error(&self, path: &str) {
        self.push(
            path,
            Err(ApiError::Transport {
                path: path.to_string(),
                message: "connection reset".to_string(),
            }),
        )
        .await;
    }

    async fn push(&self, path: &str, outcome: ApiResult<ApiResponse>) {
        self.scripts
            .lock()
            .await
            .entry(path.to_string())
            .or_default()
            .push_back(outcome);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn request(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.calls.lock().await.push(request.path.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        let next = self
            .scripts
            .lock()
            .await
            .get_mut(&request.path)
            .and_then(|queue| queue.pop_front());

        next.unwrap_or_else(|| {
            Err(ApiError::Status {
                status: 404,
                path: request.path.clone(),
                body: Value::Null,
            })
        })
    }
}

pub fn client_for(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(transport.clone())
}
