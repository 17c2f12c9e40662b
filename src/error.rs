use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("API Error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Empty response: the model returned no text")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(serde_json::Error),

    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config Error: {0}")]
    Config(String),
}

impl PromptError {
    /// Failures worth another attempt: network trouble, rate limiting and server errors.
    ///
    /// A body that fails to decode or a request that fails to build will fail the same way again.
    pub fn is_transient(&self) -> bool {
        match self {
            PromptError::Api(e) => {
                !e.is_decode() && !e.is_builder() && (e.is_timeout() || e.is_connect() || e.is_request())
            }
            PromptError::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_server_errors_are_transient() {
        let limited = PromptError::Http { status: 429, body: String::new() };
        let unavailable = PromptError::Http { status: 503, body: String::new() };
        assert!(limited.is_transient());
        assert!(unavailable.is_transient());
    }

    #[test]
    fn client_and_parse_errors_are_not_transient() {
        let auth = PromptError::Http { status: 401, body: "bad key".into() };
        assert!(!auth.is_transient());
        assert!(!PromptError::EmptyResponse.is_transient());
        assert!(!PromptError::ContractViolation("missing field".into()).is_transient());
    }
}
