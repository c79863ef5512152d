//! Provider client configuration

use std::time::Duration;

use super::types::ApiStyle;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Parameters for building a provider HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base, without a trailing slash
    pub base_url: String,
    /// Endpoint family to call
    pub api_style: ApiStyle,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout; `None` leaves it to the HTTP client
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration for the given API base
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Set the API style
    pub fn with_api_style(mut self, api_style: ApiStyle) -> Self {
        self.api_style = api_style;
        self
    }

    /// Set the overall request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Full URL of the endpoint for the configured style
    pub fn endpoint_url(&self) -> String {
        match self.api_style {
            ApiStyle::Responses => format!("{}/responses", self.base_url),
            ApiStyle::ChatCompletions => format!("{}/chat/completions", self.base_url),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_style: ApiStyle::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api_style, ApiStyle::Responses);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://localhost:8080/v1/")
            .with_api_style(ApiStyle::ChatCompletions)
            .with_request_timeout(Duration::from_secs(30))
            .with_connect_timeout(Duration::from_secs(1));

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.api_style, ApiStyle::ChatCompletions);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_endpoint_url() {
        let config = ClientConfig::new("https://api.openai.com/v1");
        assert_eq!(config.endpoint_url(), "https://api.openai.com/v1/responses");

        let config = config.with_api_style(ApiStyle::ChatCompletions);
        assert_eq!(
            config.endpoint_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
