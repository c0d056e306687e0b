//! One chat turn, from request to response.
//!
//! ```text
//! question ─┬─ empty ──────────────────────────────► canned reply, history echoed
//!           └─ facts + language + context ─► prompt ─► completion ─► append 2 lines
//! ```
//!
//! Everything before the completion call is pure and recomputed from the
//! request on every turn. The completion capability is injected through the
//! [`CompletionClient`], so tests swap in a fake backend.
use std::sync::Arc;

use capybot_conversation::{
    ComposedPrompt, ExtractedFacts, Language, LanguageDetector, PromptComposer, TopicTable,
    Transcript,
};
use capybot_core::{CompletionClient, error::CapyError, provider::ChatCompletionProvider};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

/// Number of trailing transcript lines shown to the model.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: Vec<String>,
}

/// Failure of a turn. Callers only ever see its rendered message.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Completion(#[from] CapyError),

    #[error("turn aborted: {0}")]
    Aborted(String),
}

/// Everything derived locally for one turn, ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedTurn {
    pub facts: ExtractedFacts,
    pub language: Language,
    pub context: String,
    pub prompt: ComposedPrompt,
}

pub struct TurnOrchestrator<B> {
    client: CompletionClient<B>,
    topics: &'static TopicTable,
    detector: LanguageDetector,
    composer: PromptComposer,
    history_window: usize,
}

impl<B> TurnOrchestrator<B>
where
    B: ChatCompletionProvider,
{
    pub fn new(client: CompletionClient<B>) -> Self {
        let topics = TopicTable::builtin();
        Self {
            client,
            topics,
            detector: LanguageDetector::default(),
            composer: PromptComposer::new(Default::default(), topics.source_language()),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    pub fn with_detector(mut self, detector: LanguageDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_topics(mut self, topics: &'static TopicTable) -> Self {
        self.topics = topics;
        self
    }

    pub fn with_history_window(mut self, lines: usize) -> Self {
        self.history_window = lines;
        self
    }

    pub fn client(&self) -> &CompletionClient<B> {
        &self.client
    }

    /// Fixed reply to an empty question, in the fallback language.
    pub fn empty_question_reply(&self) -> &'static str {
        self.detector.fallback().phrases().empty_question_reply
    }

    /// The pure part of a turn: facts, language, context and prompt.
    pub fn prepare(&self, question: &str, transcript: &Transcript) -> PreparedTurn {
        let facts = ExtractedFacts::from_transcript(transcript);
        let language = self.detector.detect(question);
        let context = self.topics.retrieve(question);
        let prompt = self.composer.compose(
            &facts,
            language,
            &context,
            transcript.tail(self.history_window),
            question,
        );

        debug!(
            %language,
            name_known = facts.user_name.is_some(),
            greeting_done = facts.greeting_done,
            context_hit = !context.is_empty(),
            prompt_len = prompt.as_str().len(),
            "turn prepared"
        );

        PreparedTurn {
            facts,
            language,
            context,
            prompt,
        }
    }

    #[instrument(skip_all, fields(history_len = request.history.len()))]
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, TurnError> {
        let ChatRequest { question, history } = request;
        let question = question.trim();

        if question.is_empty() {
            debug!("empty question, answering without the model");
            return Ok(ChatResponse {
                reply: self.empty_question_reply().to_owned(),
                history,
            });
        }

        let mut transcript = Transcript::from_lines(history);
        let PreparedTurn {
            language, prompt, ..
        } = self.prepare(question, &transcript);

        let reply = self
            .client
            .invoke(prompt)
            .await
            .inspect_err(|err| error!(error = %err, "completion call failed"))?;

        let reply = match reply.trim() {
            "" => {
                warn!(%language, "model returned an empty reply, asking for clarification");
                language.phrases().clarification.to_owned()
            }
            text => text.to_owned(),
        };

        transcript.record_exchange(question, &reply);

        Ok(ChatResponse {
            reply,
            history: transcript.into_lines(),
        })
    }
}

impl<B> TurnOrchestrator<B>
where
    B: ChatCompletionProvider + 'static,
{
    /// Run [`Self::handle`] on its own task.
    ///
    /// The turn keeps running if the caller goes away, and a panic anywhere in
    /// the turn comes back as [`TurnError::Aborted`] instead of tearing down
    /// the connection.
    pub async fn handle_detached(
        self: Arc<Self>,
        request: ChatRequest,
    ) -> Result<ChatResponse, TurnError> {
        tokio::spawn(async move { self.handle(request).await })
            .await
            .map_err(|err| {
                error!(error = %err, "turn task failed");
                TurnError::Aborted(err.to_string())
            })?
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use capybot_conversation::{Language, Phrases};
    use capybot_core::{
        generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
        model::Model,
        provider::{ChatCompleteFuture, ChatCompleteParameters},
    };

    use super::*;

    #[derive(Default)]
    struct Scripted {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl ChatCompletionProvider for Scripted {
        fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
            self.prompts
                .lock()
                .unwrap()
                .push(params.messages()[0].text().to_owned());
            let reply = self.reply.clone();
            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    message: GenericMessage::new(reply, GenericRole::Assistant),
                    usage: None,
                })
            })
        }
    }

    fn orchestrator(reply: &str) -> TurnOrchestrator<Scripted> {
        let backend = Scripted {
            reply: reply.into(),
            ..Default::default()
        };
        TurnOrchestrator::new(CompletionClient::new(backend, Model::default()))
    }

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn prepare_uses_only_the_history_window() {
        let orchestrator = orchestrator("ok").with_history_window(2);
        let transcript = Transcript::from_lines(lines(&[
            "User: Maria",
            "CapyBot: first",
            "User: second question here",
            "CapyBot: third answer here",
        ]));

        let prepared = orchestrator.prepare("precio", &transcript);
        let prompt = prepared.prompt.as_str();

        assert_eq!(prepared.facts.user_name.as_deref(), Some("Maria"));
        assert!(!prepared.context.is_empty());
        assert!(!prompt.contains("CapyBot: first"));
        assert!(prompt.contains("User: second question here"));
        assert!(prompt.contains("CapyBot: third answer here"));
    }

    #[tokio::test]
    async fn reply_is_trimmed_and_appended() {
        let orchestrator = orchestrator("  El plan Pro cuesta S/. 60 al mes.  ");
        let response = orchestrator
            .handle(ChatRequest {
                question: "  precio ".into(),
                history: vec![],
            })
            .await
            .unwrap();

        assert_eq!(response.reply, "El plan Pro cuesta S/. 60 al mes.");
        assert_eq!(
            response.history,
            lines(&["User: precio", "CapyBot: El plan Pro cuesta S/. 60 al mes."])
        );

        let prompts = orchestrator.client().backend().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("USER: precio\nASSISTANT:\n"));
    }

    #[tokio::test]
    async fn blank_reply_becomes_clarification_in_detected_language() {
        let orchestrator = orchestrator(" \n ");
        let question = "Could you please explain what kind of reports the system \
                        generates for a small business owner?";
        let response = orchestrator
            .handle(ChatRequest {
                question: question.into(),
                history: vec![],
            })
            .await
            .unwrap();

        let clarification = Phrases::for_language(Language::English).clarification;
        assert_eq!(response.reply, clarification);
        assert_eq!(response.history[1], format!("CapyBot: {clarification}"));
    }

    #[tokio::test]
    async fn empty_question_skips_the_model() {
        let orchestrator = orchestrator("never used");
        let history = lines(&["User: hi", "CapyBot: hello"]);
        for question in ["", " \t"] {
            let response = orchestrator
                .handle(ChatRequest {
                    question: question.into(),
                    history: history.clone(),
                })
                .await
                .unwrap();

            assert_eq!(response.reply, orchestrator.empty_question_reply());
            assert_eq!(response.history, history);
        }
        assert!(orchestrator.client().backend().prompts.lock().unwrap().is_empty());
    }
}
