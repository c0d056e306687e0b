use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::Model,
};

/// Boxed future returned by [`ChatCompletionProvider::chat_complete`].
pub type ChatCompleteFuture<'p> =
    Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>;

/// A **backend** turns a list of chat messages into a network call to a
/// concrete provider (Groq, OpenAI, a local server, …) and parses the reply.
///
/// The trait is intentionally minimal: one method performing a *single*
/// non-streaming round-trip. It returns a boxed future so it stays object-safe
/// without pulling in `async_trait`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Execute the chat prompt and return the provider's message.
    fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p>;
}

impl<P: ChatCompletionProvider + ?Sized> ChatCompletionProvider for std::sync::Arc<P> {
    fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
        (**self).chat_complete(params)
    }
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters {
    pub messages: Vec<GenericMessage>,
    pub model: Model,
    pub temperature: Option<f64>,
}

impl ChatCompleteParameters {
    pub fn new(messages: Vec<GenericMessage>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
        }
    }

    pub fn messages(&self) -> &Vec<GenericMessage> {
        &self.messages
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
