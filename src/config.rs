use crate::error::PromptError;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Runtime settings for the Gemini transport.
///
/// Timeout and retry are off by default: one request, no deadline.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub max_attempts: u32,
    pub retry_backoff: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            max_attempts: 1,
            retry_backoff: Duration::from_millis(1000),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retry(mut self, max_attempts: u32, backoff: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.retry_backoff = backoff;
        self
    }

    /// Reads the process environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, PromptError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PromptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let nonblank = |k: &String| !k.trim().is_empty();
        let api_key = lookup("GEMINI_API_KEY")
            .filter(nonblank)
            .or_else(|| lookup("API_KEY").filter(nonblank))
            .ok_or_else(|| PromptError::Config("GEMINI_API_KEY (or API_KEY) must be set".into()))?;

        let mut config = Config::new(api_key);

        if let Some(model) = lookup("GEMINI_MODEL") {
            config = config.with_model(model);
        }
        if let Some(url) = lookup("GEMINI_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(secs) = parse_number(&lookup, "PROMPT_MASTER_TIMEOUT_SECS")? {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        let attempts = parse_number(&lookup, "PROMPT_MASTER_MAX_ATTEMPTS")?.unwrap_or(1);
        let backoff_ms = parse_number(&lookup, "PROMPT_MASTER_RETRY_BACKOFF_MS")?.unwrap_or(1000);
        let attempts = u32::try_from(attempts)
            .map_err(|_| PromptError::Config(format!("PROMPT_MASTER_MAX_ATTEMPTS out of range: {attempts}")))?;

        Ok(config.with_retry(attempts, Duration::from_millis(backoff_ms)))
    }
}

fn parse_number<F>(lookup: &F, key: &str) -> Result<Option<u64>, PromptError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| PromptError::Config(format!("{key}='{raw}' is not a number: {e}"))),
    }
}
