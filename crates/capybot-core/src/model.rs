//! Model identifiers used throughout the **capybot** workspace.
//!
//! Application code picks an enum variant instead of typing literal model
//! names; each provider crate maps the variants onto its own naming scheme.
//! Anything not covered by a dedicated variant travels as [`Model::Custom`],
//! which is what a model name read from configuration falls back to.
//!
//! ```rust
//! use capybot_core::model::{GroqModel, Model};
//!
//! let model: Model = "llama-3.1-8b-instant".parse().unwrap();
//! assert_eq!(model, Model::Groq(GroqModel::Llama3_1_8bInstant));
//! assert_eq!(model.to_string(), "llama-3.1-8b-instant");
//! ```
use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models hosted on Groq's OpenAI-compatible API.
    Groq(GroqModel),
    /// Any model name not covered by a dedicated enum (self-hosted, beta, …).
    Custom(Cow<'static, str>),
}

/// Models known to work with the CapyBot prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_1_8bInstant,
    Llama3_3_70bVersatile,
    Gemma2_9bIt,
}

impl GroqModel {
    pub const ALL: [GroqModel; 3] = [
        GroqModel::Llama3_1_8bInstant,
        GroqModel::Llama3_3_70bVersatile,
        GroqModel::Gemma2_9bIt,
    ];

    /// Provider-side model id.
    pub fn id(self) -> &'static str {
        match self {
            GroqModel::Llama3_1_8bInstant => "llama-3.1-8b-instant",
            GroqModel::Llama3_3_70bVersatile => "llama-3.3-70b-versatile",
            GroqModel::Gemma2_9bIt => "gemma2-9b-it",
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Groq(GroqModel::Llama3_1_8bInstant)
    }
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}

impl FromStr for Model {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(GroqModel::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .map(Model::Groq)
            .unwrap_or_else(|| Model::Custom(Cow::Owned(s.to_owned()))))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Groq(model) => f.write_str(model.id()),
            Model::Custom(name) => f.write_str(name),
        }
    }
}
