use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use formflow_core::config::EndpointConfig;
use formflow_core::LoaderError;

use crate::response::ZonesResponse;

/// Fetches the option set for a parent value. Implemented over HTTP in
/// production and by in-process fakes in tests.
#[async_trait]
pub trait ZoneTransport: Send + Sync {
    async fn fetch_zones(&self, parent: &str) -> Result<ZonesResponse, LoaderError>;
}

/// reqwest-backed transport posting urlencoded form data to a fixed
/// endpoint, with bounded connect and request timeouts.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(config: &EndpointConfig) -> Result<Self, LoaderError> {
        let endpoint =
            Url::parse(&config.url).map_err(|e| LoaderError::InvalidEndpoint(e.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| LoaderError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ZoneTransport for HttpTransport {
    async fn fetch_zones(&self, parent: &str) -> Result<ZonesResponse, LoaderError> {
        debug!(%parent, endpoint = %self.endpoint, "requesting zones");

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&[("action", "zones"), ("parent", parent)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&body).map_err(|e| LoaderError::MalformedResponse(e.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LoaderError {
    if err.is_timeout() {
        LoaderError::Timeout
    } else {
        LoaderError::Transport(err.to_string())
    }
}
