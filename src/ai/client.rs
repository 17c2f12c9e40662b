use crate::config::Config;
use crate::error::PromptError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;

/// One generation call: a system instruction, the user's content, and an optional
/// response schema constraining the reply to JSON.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_content: String,
    pub response_schema: Option<Value>,
}

/// Anything that can turn a `GenerationRequest` into raw model text.
///
/// An empty string means the model produced no text; callers decide what that means.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, PromptError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    config: Config,
}

impl GeminiClient {
    pub fn new(config: Config) -> Result<Self, PromptError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn generate_attempt(&self, request: &GenerationRequest) -> Result<String, PromptError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let payload = build_payload(request);
        log::debug!(
            "POST {url} (instruction: {} chars, content: {} chars)",
            request.system_instruction.chars().count(),
            request.user_content.chars().count()
        );

        let res = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("API Error {status}: {err_text}");
            return Err(PromptError::Http {
                status: status.as_u16(),
                body: err_text,
            });
        }

        let body: Value = res.json().await?;
        Ok(extract_text(&body))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, PromptError> {
        let max_attempts = self.config.max_attempts.max(1);

        let mut attempt = 1;
        loop {
            match self.generate_attempt(request).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < max_attempts && e.is_transient() => {
                    let delay = backoff_delay(self.config.retry_backoff, attempt);
                    log::warn!("Attempt {attempt}/{max_attempts} failed: {e}. Retrying in {delay:?}");
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Delay before the retry that follows `attempt`: `base * 2^(attempt-1)`, saturating at `Duration::MAX`.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    2u32.checked_pow(attempt.saturating_sub(1))
        .and_then(|factor| base.checked_mul(factor))
        .unwrap_or(Duration::MAX)
}

fn build_payload(request: &GenerationRequest) -> Value {
    let mut payload = json!({
        "systemInstruction": {
            "parts": [{ "text": request.system_instruction }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.user_content }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json"
        }
    });

    if let Some(schema) = &request.response_schema {
        payload["generationConfig"]["responseSchema"] = schema.clone();
    }

    payload
}

/// Concatenates the text parts of the first candidate. Missing pieces yield "".
fn extract_text(body: &Value) -> String {
    body.pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}
