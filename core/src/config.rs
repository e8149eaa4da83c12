//! Client configuration.

/// Connection settings for the signing service.
///
/// Validation happens when the transport is built, so a config can be
/// assembled freely — by hand or from the environment — before use.
#[derive(Debug, Clone)]
pub struct EimzoConfig {
    /// Base URL of the service, including the scheme.
    pub base_url: String,
    /// Optional API key, sent as `authorization: Bearer <key>`.
    pub api_key: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl EimzoConfig {
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Config with default timeouts and no API key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            connect_timeout_secs: Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read `E_IMZO_BASE_URL` and `E_IMZO_API_KEY` from the environment.
    ///
    /// A missing base URL yields an empty string, which the transport
    /// rejects at construction.
    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var("E_IMZO_BASE_URL").unwrap_or_default());
        if let Ok(key) = std::env::var("E_IMZO_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }
}
