//! Server configuration: command-line flags with environment fallbacks.
//!
//! | Flag                  | Variable                     | Default                                   |
//! |-----------------------|------------------------------|-------------------------------------------|
//! | `--bind`              | `CAPYBOT_BIND`               | `0.0.0.0:8000`                            |
//! | `--api-key`           | `GROQ_API_KEY`               | required                                  |
//! | `--base-url`          | `CAPYBOT_BASE_URL`           | `https://api.groq.com/openai/v1`          |
//! | `--model`             | `CAPYBOT_MODEL`              | `llama-3.1-8b-instant`                    |
//! | `--temperature`       | `CAPYBOT_TEMPERATURE`        | `0.5`                                     |
//! | `--timeout-secs`      | `CAPYBOT_TIMEOUT_SECS`       | `30`                                      |
//! | `--history-window`    | `CAPYBOT_HISTORY_WINDOW`     | `10`                                      |
//! | `--fallback-language` | `CAPYBOT_FALLBACK_LANGUAGE`  | `es`                                      |
//! | `--registration-url`  | `CAPYBOT_REGISTRATION_URL`   | `http://localhost/capy-ventas/pos/login`  |

use std::time::Duration;

use capybot_conversation::{
    Language, LanguageDetector, Persona, PromptComposer, TopicTable,
    composer::DEFAULT_REGISTRATION_URL,
};
use capybot_core::{CompletionClient, Result, model::Model, provider::ChatCompletionProvider};
use capybot_openai::{DEFAULT_BASE_URL, OpenAiAdapter, OpenAiAdapterBuilder};
use clap::Parser;

use crate::orchestrator::{DEFAULT_HISTORY_WINDOW, TurnOrchestrator};

#[derive(Parser, Debug, Clone)]
#[command(name = "capybot", about = "CapyBot conversational backend", version)]
pub struct Config {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "CAPYBOT_BIND", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// API key for the completion provider.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = "CAPYBOT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model id sent to the provider.
    #[arg(long, env = "CAPYBOT_MODEL", default_value = "llama-3.1-8b-instant")]
    pub model: Model,

    /// Sampling temperature.
    #[arg(long, env = "CAPYBOT_TEMPERATURE", default_value_t = 0.5)]
    pub temperature: f64,

    /// Request timeout for completion calls, in seconds.
    #[arg(long, env = "CAPYBOT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Number of trailing transcript lines included in the prompt.
    #[arg(long, env = "CAPYBOT_HISTORY_WINDOW", default_value_t = DEFAULT_HISTORY_WINDOW)]
    pub history_window: usize,

    /// Language used when detection is inconclusive (`es` or `en`).
    #[arg(long, env = "CAPYBOT_FALLBACK_LANGUAGE", default_value = "es")]
    pub fallback_language: Language,

    /// Sign-up link the assistant shares, copied verbatim into every prompt.
    #[arg(long, env = "CAPYBOT_REGISTRATION_URL", default_value = DEFAULT_REGISTRATION_URL)]
    pub registration_url: String,
}

impl Config {
    /// Build the OpenAI-compatible backend described by this configuration.
    pub fn backend(&self) -> Result<OpenAiAdapter> {
        OpenAiAdapterBuilder::new()
            .with_api_key(&self.api_key)
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }

    /// Wire `backend` into a fully configured orchestrator.
    pub fn orchestrator<B>(&self, backend: B) -> TurnOrchestrator<B>
    where
        B: ChatCompletionProvider,
    {
        let client =
            CompletionClient::new(backend, self.model.clone()).with_temperature(self.temperature);
        let topics = TopicTable::builtin();
        let composer = PromptComposer::new(
            Persona::default().with_registration_url(&self.registration_url),
            topics.source_language(),
        );

        TurnOrchestrator::new(client)
            .with_topics(topics)
            .with_detector(LanguageDetector::new(self.fallback_language))
            .with_composer(composer)
            .with_history_window(self.history_window)
    }
}

#[cfg(test)]
mod tests {
    use capybot_core::model::GroqModel;

    use super::*;

    #[test]
    fn defaults_match_the_documented_table() {
        let config = Config::try_parse_from(["capybot", "--api-key", "k"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8000");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, Model::Groq(GroqModel::Llama3_1_8bInstant));
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.history_window, 10);
        assert_eq!(config.fallback_language, Language::Spanish);
        assert_eq!(config.registration_url, DEFAULT_REGISTRATION_URL);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "capybot",
            "--api-key",
            "k",
            "--model",
            "my-model",
            "--fallback-language",
            "en",
            "--history-window",
            "4",
        ])
        .unwrap();
        assert_eq!(config.model, Model::Custom("my-model".into()));
        assert_eq!(config.fallback_language, Language::English);
        assert_eq!(config.history_window, 4);

        let orchestrator = config.orchestrator(config.backend().unwrap());
        assert_eq!(
            orchestrator.empty_question_reply(),
            Language::English.phrases().empty_question_reply
        );
    }

    #[test]
    fn unsupported_fallback_language_is_rejected() {
        let result =
            Config::try_parse_from(["capybot", "--api-key", "k", "--fallback-language", "fr"]);
        assert!(result.is_err());
    }
}
