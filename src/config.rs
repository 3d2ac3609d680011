use thiserror::Error;

pub const APP_NAME: &str = "veridoc";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

/// Configuration for the advisory (LLM) boundary.
///
/// Read from the environment in the binary and passed in explicitly —
/// never ambient global state, so tests can substitute a mock client.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl AdvisoryConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build from the process environment.
    ///
    /// `OPENAI_API_KEY` is required (empty counts as missing);
    /// `OPENAI_BASE_URL`, `VERIDOC_MODEL` and `VERIDOC_TIMEOUT_SECS`
    /// override the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(&api_key);

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        if let Ok(model) = std::env::var("VERIDOC_MODEL") {
            config = config.with_model(&model);
        }
        if let Ok(raw) = std::env::var("VERIDOC_TIMEOUT_SECS") {
            let timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "VERIDOC_TIMEOUT_SECS".to_string(),
                value: raw,
            })?;
            config = config.with_timeout_secs(timeout_secs);
        }

        Ok(config)
    }
}
