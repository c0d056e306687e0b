use std::{env, sync::Arc, time::Duration};

use capybot_core::error::{CapyError, Result};

use crate::client::OpenAiClient;

/// Environment variable read by [`OpenAiAdapterBuilder::new_from_env`].
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
/// Groq's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`capybot_core::provider::ChatCompletionProvider`].
///
/// It owns the API key, the base URL and a shareable, connection-pooled
/// `reqwest::Client`. All user-facing functionality sits on
/// [`capybot_core::CompletionClient`] once the adapter is plugged in.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use capybot_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GROQ_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the [`API_KEY_ENV`]
    /// environment variable. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at another OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`CapyError::Invalid`] – if the API key is missing or blank.
    /// * [`CapyError::Backend`] – if the HTTP client can't be constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CapyError::Invalid(format!("missing env variable: `{API_KEY_ENV}`")))?;

        let client = OpenAiClient::new(
            api_key,
            self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )
        .map_err(CapyError::from)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
