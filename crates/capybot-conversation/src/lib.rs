//! # capybot-conversation
//!
//! Everything CapyBot derives locally before talking to the model:
//!
//! | Module         | What it provides                                                    |
//! |----------------|---------------------------------------------------------------------|
//! | [`transcript`] | typed view over the caller's flat `"Speaker: text"` history         |
//! | [`facts`]      | user name and name-request detection                                |
//! | [`language`]   | statistical language detection with a fixed fallback               |
//! | [`topics`]     | keyword → snippet retrieval from the built-in topic table           |
//! | [`phrases`]    | per-language canned sentences                                       |
//! | [`composer`]   | deterministic prompt assembly                                       |
//!
//! All of it is pure: the same inputs always give the same outputs, and no
//! value survives between requests.
pub mod composer;
pub mod facts;
pub mod language;
pub mod phrases;
pub mod topics;
pub mod transcript;

pub use composer::{ComposedPrompt, Persona, PromptComposer, compose_prompt};
pub use facts::{ExtractedFacts, extract_name, greeting_done};
pub use language::{Language, LanguageDetector, detect_language};
pub use phrases::Phrases;
pub use topics::{Topic, TopicTable, retrieve_context};
pub use transcript::{Speaker, Transcript, Turn};
