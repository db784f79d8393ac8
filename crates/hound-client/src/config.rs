//! Client configuration.

use std::time::Duration;

use hound_models::{Endpoint, Mode, RecognitionStyle};

use crate::error::{HoundError, HoundResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Sighthound client configuration.
///
/// Immutable once the client is built.
#[derive(Clone)]
pub struct HoundConfig {
    /// Static access token sent as `X-Access-Token`
    pub api_key: String,
    /// API host selector
    pub mode: Mode,
    /// Endpoint used by `detect`
    pub endpoint: Endpoint,
    /// How `recognize` sends its category
    pub recognition_style: RecognitionStyle,
    /// Per-request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Replaces the mode's host when set
    pub base_url: Option<String>,
}

impl std::fmt::Debug for HoundConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoundConfig")
            .field("api_key", &"<redacted>")
            .field("mode", &self.mode)
            .field("endpoint", &self.endpoint)
            .field("recognition_style", &self.recognition_style)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HoundConfig {
    /// Build a config from selector strings.
    ///
    /// Fails if `mode` or `endpoint` is not in its allowed set.
    pub fn new(api_key: impl Into<String>, mode: &str, endpoint: &str) -> HoundResult<Self> {
        let mode: Mode = mode.parse()?;
        let endpoint: Endpoint = endpoint.parse()?;
        Ok(Self::with_selectors(api_key, mode, endpoint))
    }

    /// Build a config from already-typed selectors, with default timeouts.
    pub fn with_selectors(api_key: impl Into<String>, mode: Mode, endpoint: Endpoint) -> Self {
        Self {
            api_key: api_key.into(),
            mode,
            endpoint,
            recognition_style: RecognitionStyle::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            base_url: None,
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> HoundResult<Self> {
        let api_key = std::env::var("SIGHTHOUND_API_KEY")
            .map_err(|_| HoundError::configuration("SIGHTHOUND_API_KEY must be set"))?;

        if api_key.trim().is_empty() {
            return Err(HoundError::configuration("SIGHTHOUND_API_KEY cannot be empty"));
        }

        let mode = std::env::var("SIGHTHOUND_MODE").unwrap_or_else(|_| "dev".to_string());
        let endpoint =
            std::env::var("SIGHTHOUND_ENDPOINT").unwrap_or_else(|_| "recognition".to_string());

        let mut config = Self::new(api_key, &mode, &endpoint)?;

        if let Ok(style) = std::env::var("SIGHTHOUND_RECOGNITION_STYLE") {
            config.recognition_style = style.parse()?;
        }

        config.timeout = Duration::from_secs(env_secs(
            "SIGHTHOUND_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        ));
        config.connect_timeout = Duration::from_secs(env_secs(
            "SIGHTHOUND_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        ));
        config.base_url = std::env::var("SIGHTHOUND_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(config)
    }

    pub fn recognition_style(mut self, style: RecognitionStyle) -> Self {
        self.recognition_style = style;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Host part of every request URL, without trailing slash.
    pub fn host(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => self.mode.base_url(),
        }
    }

    /// URL of an endpoint on the configured host.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/v1/{}", self.host(), endpoint.as_str())
    }
}

fn env_secs(var: &str, default: u64) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
