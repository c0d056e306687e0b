//! Generic, lightweight client that sends a prompt to a single concrete
//! [`ChatCompletionProvider`] and hands back the reply text.
//!
//! The client is **generic over the backend type `B`**, so the turn
//! orchestrator receives its completion capability as an explicit, injected
//! value. Tests plug in a fake backend; the binary plugs in the
//! OpenAI-compatible adapter.
//!
//! ```rust
//! use capybot_core::{CompletionClient, model::Model};
//! use capybot_core::generic::{GenericChatCompletionResponse, GenericMessage, GenericRole};
//! use capybot_core::provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider};
//!
//! struct Echo;
//!
//! impl ChatCompletionProvider for Echo {
//!     fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
//!         Box::pin(async move {
//!             let text = params.messages()[0].text().to_owned();
//!             Ok(GenericChatCompletionResponse {
//!                 message: GenericMessage::new(text, GenericRole::Assistant),
//!                 usage: None,
//!             })
//!         })
//!     }
//! }
//!
//! let client = CompletionClient::new(Echo, Model::default());
//! # let _ = client;
//! ```
use std::sync::Arc;

use crate::{
    error::Result,
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    template::IntoPrompt,
};

/// A client bound to a single provider, model and sampling temperature.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct CompletionClient<B> {
    backend: Arc<B>,
    model: Model,
    temperature: Option<f64>,
}

impl<B> Clone for CompletionClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

impl<B> CompletionClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B, model: Model) -> Self {
        Self {
            backend: Arc::new(backend),
            model,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send `prompt` and return the reply text.
    ///
    /// A reply without textual content yields the empty string; deciding what
    /// to show the user in that case is up to the caller.
    pub async fn invoke<P>(&self, prompt: P) -> Result<String>
    where
        P: IntoPrompt,
    {
        let mut params = ChatCompleteParameters::new(prompt.into_prompt(), self.model.clone());
        if let Some(temperature) = self.temperature {
            params = params.with_temperature(temperature);
        }

        let response = self.backend.chat_complete(params).await?;
        Ok(response.message.content.unwrap_or_default())
    }
}
