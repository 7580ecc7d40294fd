use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    /// URL of the zones endpoint.
    pub url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Bound on the whole request, so a dead endpoint resolves to the
    /// error outcome instead of leaving the widget loading.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}
