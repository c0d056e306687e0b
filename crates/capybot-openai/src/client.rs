use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

/// Minimal HTTP client for an OpenAI-compatible *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * No retries: a failed call is reported once and left to the caller.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Build a default `reqwest` client with the given request timeout.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(api_key, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );

        let url = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, model = %request.model, messages = request.messages.len(), "sending chat completion");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "chat completion rejected by provider");

            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = parsed.id.as_deref().unwrap_or("-"),
            model = %parsed.model,
            choices = parsed.choices.len(),
            "chat completion received"
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_v1::{ChatCompletionMessage, MessageRole};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OpenAiClient {
        OpenAiClient::new("test-api-key", base_url, Duration::from_secs(5)).unwrap()
    }

    fn test_request() -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            "llama-3.1-8b-instant".into(),
            vec![ChatCompletionMessage {
                role: MessageRole::User,
                content: "Hola".into(),
                name: None,
            }],
        )
        .temperature(0.5)
    }

    #[tokio::test]
    async fn chat_completion_success() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "llama-3.1-8b-instant",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "¡Hola! 😊"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
        });

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "temperature": 0.5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.chat_completion(test_request()).await.unwrap();

        assert_eq!(result.id.as_deref(), Some("chatcmpl-test"));
        assert_eq!(result.choices.len(), 1);
        assert_eq!(result.choices[0].message.content.as_deref(), Some("¡Hola! 😊"));
        assert_eq!(result.usage.unwrap().total_tokens, 14);
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.chat_completion(test_request()).await.unwrap_err();

        match err {
            OpenAiError::Api { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_serde_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.chat_completion(test_request()).await.unwrap_err();
        assert!(matches!(err, OpenAiError::Serde(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = test_client("http://localhost:1234/v1/");
        assert_eq!(client.base_url(), "http://localhost:1234/v1");
    }
}
