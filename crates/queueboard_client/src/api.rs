use std::time::Duration;

use board_logging::board_warn;
use reqwest::header::CONTENT_TYPE;

use crate::{wire, ApiError, EnqueueReceipt, FailureKind, QueueSnapshot};

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Origin the wire paths are rooted at, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait QueueApi: Send + Sync {
    /// Fetch one queue snapshot. Retries once on a transport failure.
    async fn fetch_queue(&self) -> Result<QueueSnapshot, ApiError>;
    /// Enqueue a lookup job for the authenticated user.
    async fn enqueue_self(&self, catch_converts: bool) -> Result<EnqueueReceipt, ApiError>;
    /// End the backend session.
    async fn logout(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestQueueApi {
    settings: ClientSettings,
}

impl ReqwestQueueApi {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let base = reqwest::Url::parse(&self.settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        base.join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn fetch_queue_once(&self) -> Result<QueueSnapshot, ApiError> {
        let url = self.endpoint("/fetch/queue")?;
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        wire::decode_snapshot(&body)
    }

    async fn post_empty_json(&self, url: reqwest::Url) -> Result<reqwest::Response, ApiError> {
        let client = self.build_client()?;
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl QueueApi for ReqwestQueueApi {
    async fn fetch_queue(&self) -> Result<QueueSnapshot, ApiError> {
        match self.fetch_queue_once().await {
            Err(err) if err.kind.is_retryable() => {
                board_warn!("queue fetch failed ({}), retrying once", err.kind);
                self.fetch_queue_once().await
            }
            result => result,
        }
    }

    async fn enqueue_self(&self, catch_converts: bool) -> Result<EnqueueReceipt, ApiError> {
        let mut url = self.endpoint("/fetch/enqueue_self")?;
        url.query_pairs_mut().append_pair(
            "catch_converts",
            if catch_converts { "true" } else { "false" },
        );

        let response = self.post_empty_json(url).await?;
        let body = response.text().await.map_err(map_reqwest_error)?;
        wire::decode_receipt(&body)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/logout")?;
        self.post_empty_json(url).await?;
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
