//! Unified error type exposed by **`capybot-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the [`CompletionClient`](crate::CompletionClient).
//! The turn orchestrator does not distinguish between them; it only reports
//! the rendered message.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CapyError>;

#[derive(Debug, Error)]
pub enum CapyError {
    /// The selected backend does not recognise or support the requested model.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the completion provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Rejected input or configuration, such as a blank API key.
    #[error("invalid: {0}")]
    Invalid(String),
}
