use std::sync::Arc;

use capybot_core::{
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            let response = client.chat_completion(request).await?;

            let usage = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_tokens as i64,
                completion_tokens: usage.completion_tokens as i64,
                total_tokens: usage.total_tokens as i64,
            });

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            match &first_choice.finish_reason {
                Some(FinishReason::ToolCalls | FinishReason::FunctionCall) => Err(
                    OpenAiError::Format("tool calls are not supported".into()).into(),
                ),
                _ => Ok(GenericChatCompletionResponse {
                    message: first_choice.message.into(),
                    usage,
                }),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use capybot_core::{
        error::CapyError,
        generic::{GenericMessage, GenericRole},
        model::Model,
    };
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::OpenAiAdapterBuilder;

    fn adapter(server: &MockServer) -> OpenAiAdapter {
        OpenAiAdapterBuilder::new()
            .with_api_key("test-api-key")
            .with_base_url(server.uri())
            .build()
            .unwrap()
    }

    fn params() -> ChatCompleteParameters {
        ChatCompleteParameters::new(
            vec![GenericMessage::new("precio".into(), GenericRole::User)],
            Model::default(),
        )
    }

    async fn mount(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn first_choice_becomes_generic_message() {
        let server = MockServer::start().await;
        mount(
            &server,
            serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "S/. 60"}, "finish_reason": "stop"},
                    {"index": 1, "message": {"role": "assistant", "content": "other"}, "finish_reason": "stop"}
                ],
                "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
            }),
        )
        .await;

        let response = adapter(&server).chat_complete(params()).await.unwrap();
        assert_eq!(response.message.role, GenericRole::Assistant);
        assert_eq!(response.message.text(), "S/. 60");
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(5));
    }

    #[tokio::test]
    async fn no_choices_is_a_backend_error() {
        let server = MockServer::start().await;
        mount(
            &server,
            serde_json::json!({"model": "llama-3.1-8b-instant", "choices": []}),
        )
        .await;

        let err = adapter(&server).chat_complete(params()).await.unwrap_err();
        assert!(matches!(err, CapyError::Backend(_)));
        assert!(err.to_string().contains("no choices"));
    }

    #[tokio::test]
    async fn tool_calls_are_rejected() {
        let server = MockServer::start().await;
        mount(
            &server,
            serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": null}, "finish_reason": "tool_calls"}]
            }),
        )
        .await;

        let err = adapter(&server).chat_complete(params()).await.unwrap_err();
        assert!(err.to_string().contains("tool calls"));
    }

    #[tokio::test]
    async fn provider_failure_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let err = adapter(&server).chat_complete(params()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("upstream exploded"), "{message}");
    }
}
