use capybot_core::error::CapyError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("provider returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("provider format error: {0}")]
    Format(String),

    #[error("invalid API key header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<OpenAiError> for CapyError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Serde(err) => CapyError::Serialization(err),
            other => CapyError::Backend(Box::new(other)),
        }
    }
}
