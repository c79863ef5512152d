//! Process configuration, read once at startup

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::error::ApiError;
use crate::llm::{ApiStyle, ClientConfig, ProviderTool, UnknownNameError};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Startup configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid value for {key}: {source}")]
    UnknownName {
        key: &'static str,
        #[source]
        source: UnknownNameError,
    },
}

/// Named bundles of model, persona and tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Concise assistant with web search
    #[default]
    Assistant,
    /// Math tutor that runs code in the provider sandbox
    MathTutor,
    /// Chat completions, no tools
    Plain,
}

impl Preset {
    pub fn api_style(&self) -> ApiStyle {
        match self {
            Preset::Assistant | Preset::MathTutor => ApiStyle::Responses,
            Preset::Plain => ApiStyle::ChatCompletions,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Preset::Assistant | Preset::Plain => DEFAULT_MODEL,
            Preset::MathTutor => "gpt-4.1-mini",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Preset::Assistant => "You are a concise, helpful assistant.",
            Preset::MathTutor => {
                "You are a personal math tutor. When asked a math question, \
                 write and run code using the code interpreter tool to answer it."
            }
            Preset::Plain => "You are a helpful assistant.",
        }
    }

    pub fn tools(&self) -> Vec<ProviderTool> {
        match self {
            Preset::Assistant => vec![ProviderTool::WebSearch],
            Preset::MathTutor => vec![ProviderTool::CodeInterpreter],
            Preset::Plain => Vec::new(),
        }
    }
}

impl FromStr for Preset {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assistant" => Ok(Preset::Assistant),
            "math_tutor" => Ok(Preset::MathTutor),
            "plain" => Ok(Preset::Plain),
            other => Err(UnknownNameError {
                kind: "preset",
                value: other.to_string(),
            }),
        }
    }
}

/// Everything the service needs, resolved once and shared read-only
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Provider credential; `None` makes `/ask` answer 500
    pub api_key: Option<String>,
    pub model_override: Option<String>,
    pub default_model: String,
    pub instructions: String,
    pub tools: Vec<ProviderTool>,
    pub client: ClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_preset(Preset::default())
    }
}

impl AppConfig {
    /// Configuration with every value taken from `preset` and no credential
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_key: None,
            model_override: None,
            default_model: preset.default_model().to_string(),
            instructions: preset.instructions().to_string(),
            tools: preset.tools(),
            client: ClientConfig::default().with_api_style(preset.api_style()),
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` as the variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let preset = match get("ASK_PRESET") {
            Some(raw) => parse_name("ASK_PRESET", &raw)?,
            None => Preset::default(),
        };
        let mut config = Self::for_preset(preset);

        if let Some(raw) = get("HOST") {
            config.host = parse_value("HOST", raw)?;
        }
        if let Some(raw) = get("PORT") {
            config.port = parse_value("PORT", raw)?;
        }

        config.api_key = get("OPENAI_API_KEY");
        config.model_override = get("OPENAI_MODEL");
        if let Some(model) = get("OPENAI_DEFAULT_MODEL") {
            config.default_model = model;
        }
        if let Some(instructions) = get("ASK_INSTRUCTIONS") {
            config.instructions = instructions;
        }
        if let Some(raw) = get("OPENAI_TOOLS") {
            config.tools = ProviderTool::parse_list(&raw)
                .map_err(|source| ConfigError::UnknownName {
                    key: "OPENAI_TOOLS",
                    source,
                })?;
        }

        if let Some(base_url) = get("OPENAI_BASE_URL") {
            config.client = ClientConfig::new(base_url).with_api_style(config.client.api_style);
        }
        if let Some(raw) = get("OPENAI_API_STYLE") {
            config.client.api_style = parse_name("OPENAI_API_STYLE", &raw)?;
        }
        if let Some(raw) = get("OPENAI_TIMEOUT_SECS") {
            let secs: u64 = parse_value("OPENAI_TIMEOUT_SECS", raw)?;
            config.client.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Explicit override if set, else the default
    pub fn resolve_model(&self) -> &str {
        self.model_override
            .as_deref()
            .unwrap_or(&self.default_model)
    }

    /// The provider credential, or the configuration error `/ask` reports
    pub fn api_key(&self) -> Result<&str, ApiError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ApiError::Configuration("OPENAI_API_KEY is not configured.".to_string()))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_value<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

fn parse_name<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = UnknownNameError>,
{
    raw.parse::<T>()
        .map_err(|source| ConfigError::UnknownName { key, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = assert_ok!(load(&[]));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert!(config.api_key.is_none());
        assert_eq!(config.resolve_model(), "gpt-4o-mini");
        assert_eq!(config.tools, vec![ProviderTool::WebSearch]);
        assert_eq!(config.client.api_style, ApiStyle::Responses);
        assert_eq!(config.client.base_url, "https://api.openai.com/v1");
        assert!(config.client.request_timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = assert_ok!(load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4.1"),
            ("OPENAI_BASE_URL", "http://localhost:4010/v1/"),
            ("OPENAI_API_STYLE", "chat_completions"),
            ("OPENAI_TOOLS", "code_interpreter"),
            ("OPENAI_TIMEOUT_SECS", "45"),
            ("ASK_INSTRUCTIONS", "Answer in French."),
        ]));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(assert_ok!(config.api_key()), "sk-test");
        assert_eq!(config.resolve_model(), "gpt-4.1");
        assert_eq!(config.client.base_url, "http://localhost:4010/v1");
        assert_eq!(config.client.api_style, ApiStyle::ChatCompletions);
        assert_eq!(config.client.request_timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.tools, vec![ProviderTool::CodeInterpreter]);
        assert_eq!(config.instructions, "Answer in French.");
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = assert_ok!(load(&[("OPENAI_API_KEY", "  "), ("OPENAI_MODEL", "")]));
        assert!(config.api_key.is_none());
        assert_eq!(config.resolve_model(), DEFAULT_MODEL);

        let err = assert_err!(config.api_key());
        assert_eq!(err.to_string(), "OPENAI_API_KEY is not configured.");
    }

    #[test]
    fn test_presets() {
        let config = assert_ok!(load(&[("ASK_PRESET", "math_tutor")]));
        assert_eq!(config.resolve_model(), "gpt-4.1-mini");
        assert_eq!(config.tools, vec![ProviderTool::CodeInterpreter]);
        assert!(config.instructions.contains("math tutor"));

        let config = assert_ok!(load(&[("ASK_PRESET", "plain"), ("OPENAI_DEFAULT_MODEL", "gpt-4o")]));
        assert!(config.tools.is_empty());
        assert_eq!(config.client.api_style, ApiStyle::ChatCompletions);
        assert_eq!(config.resolve_model(), "gpt-4o");
    }

    #[test]
    fn test_invalid_values() {
        let err = assert_err!(load(&[("PORT", "eighty")]));
        assert!(err.to_string().contains("PORT"));

        let err = assert_err!(load(&[("OPENAI_TOOLS", "web_search,teleport")]));
        assert!(err.to_string().contains("teleport"));

        assert_err!(load(&[("OPENAI_API_STYLE", "streaming")]));
        assert_err!(load(&[("ASK_PRESET", "pirate")]));
        assert_err!(load(&[("HOST", "not-an-ip")]));
        assert_err!(load(&[("OPENAI_TIMEOUT_SECS", "-1")]));
    }
}
