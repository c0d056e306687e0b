//! # capybot-core
//!
//! Provider-agnostic building blocks shared by every CapyBot crate:
//!
//! * [`generic`] – chat message / role types independent of any provider,
//! * [`provider`] – the [`ChatCompletionProvider`](provider::ChatCompletionProvider)
//!   trait a completion backend implements,
//! * [`client`] – [`CompletionClient`], the injected handle the turn
//!   orchestrator talks to,
//! * [`template`] – [`IntoPrompt`](template::IntoPrompt) for anything that can
//!   be turned into chat messages,
//! * [`model`] and [`error`].
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::CompletionClient;
pub use error::{CapyError, Result};
