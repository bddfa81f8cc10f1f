use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::endpoints::is_onboarding_path;
use super::error::ApiResult;
use super::transport::{ApiRequest, ApiResponse, ApiTransport};
use crate::event_bus::{AppEvent, EventBus};

/// Backend client used by the rest of the crate.
///
/// Successful writes to onboarding routes publish
/// [`AppEvent::OnboardingUpdated`] on the attached bus, so any mounted title
/// refreshes its verification chip.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    events: Option<Arc<EventBus>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            events: None,
        }
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let notify = request.is_mutating() && is_onboarding_path(&request.path);
        let path = request.path.clone();

        let response = self.transport.request(request).await?;

        if notify {
            if let Some(events) = &self.events {
                debug!("onboarding write to {} succeeded, notifying", path);
                events.publish(AppEvent::OnboardingUpdated);
            }
        }
        Ok(response)
    }

    pub async fn get(&self, path: impl Into<String>) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn post(&self, path: impl Into<String>, body: Value) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::with_body(Method::POST, path, body)).await
    }

    pub async fn put(&self, path: impl Into<String>, body: Value) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::with_body(Method::PUT, path, body)).await
    }

    pub async fn patch(&self, path: impl Into<String>, body: Value) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::with_body(Method::PATCH, path, body)).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> ApiResult<ApiResponse> {
        self.send(ApiRequest {
            method: Method::DELETE,
            path: path.into(),
            body: None,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints::{invoices, onboarding};
    use crate::api::ApiError;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::broadcast::error::TryRecvError;

    /// Answers 200 to everything except paths containing "fail"
    struct EchoTransport;

    #[async_trait]
    impl ApiTransport for EchoTransport {
        async fn request(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            if request.path.contains("fail") {
                return Err(ApiError::Status {
                    status: 400,
                    path: request.path,
                    body: Value::Null,
                });
            }
            Ok(ApiResponse::ok(json!({ "path": request.path })))
        }
    }

    fn client_with_bus() -> (ApiClient, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let client = ApiClient::new(Arc::new(EchoTransport)).with_events(bus.clone());
        (client, bus)
    }

    #[tokio::test]
    async fn test_onboarding_write_notifies() {
        let (client, bus) = client_with_bus();
        let mut rx = bus.subscribe();

        client.patch(onboarding::detail("pharmacist"), json!({ "abn": "1" })).await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), AppEvent::OnboardingUpdated);
    }

    #[tokio::test]
    async fn test_reads_and_other_writes_do_not_notify() {
        let (client, bus) = client_with_bus();
        let mut rx = bus.subscribe();

        client.get(onboarding::v2_detail("owner")).await.unwrap();
        client.post(invoices::GENERATE, json!({})).await.unwrap();

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_failed_onboarding_write_does_not_notify() {
        let (client, bus) = client_with_bus();
        let mut rx = bus.subscribe();

        let err = client.post("/client-profile/fail/onboarding/", json!({})).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
