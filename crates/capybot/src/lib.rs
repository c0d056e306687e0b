//! # `capybot` – the conversational backend
//!
//! This crate glues the building blocks of the workspace into a running
//! service:
//!
//! | Crate                        | What it provides                                              |
//! |------------------------------|---------------------------------------------------------------|
//! | **`capybot-core`**           | completion trait, generic client, errors, model ids           |
//! | **`capybot-conversation`**   | transcript, facts, language, topics, prompt composition       |
//! | **`capybot-openai`**         | HTTP backend for OpenAI-compatible APIs (Groq by default)     |
//!
//! On top of those it adds the [`orchestrator`] (one call per chat turn) and
//! the axum [`server`] exposing `GET /` and `POST /chat`.
//!
//! ```rust,no_run
//! use capybot::{
//!     completion::{CompletionClient, model::Model},
//!     openai::OpenAiAdapterBuilder,
//!     orchestrator::{ChatRequest, TurnOrchestrator},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OpenAiAdapterBuilder::new_from_env().build()?;
//!     let orchestrator = TurnOrchestrator::new(CompletionClient::new(backend, Model::default()));
//!     let response = orchestrator
//!         .handle(ChatRequest { question: "precio".into(), history: vec![] })
//!         .await?;
//!     println!("{}", response.reply);
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod server;

pub use capybot_conversation as conversation;
pub use capybot_core as completion;
pub use capybot_openai as openai;
