//! Deterministic prompt assembly.
//!
//! The prompt is a single text blob, built from these sections in order:
//!
//! ```markdown
//! # Role            persona and the one domain CapyBot talks about
//! ## Rules          language, scope, refusal, name handling, context, style, sign-up link
//! ## Facts          user name and target language
//! ## Context        retrieved snippet (omitted when empty)
//! ## Chat history   trailing window of the transcript (omitted when empty)
//! USER: …           the current message
//! ASSISTANT:
//! ```
//!
//! Nothing here reads the clock, the environment or a random source, so equal
//! inputs always give byte-identical prompts.
use std::fmt;

use capybot_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};
use capybot_prompt::{PromptBuilder, PromptChain, PromptFragment};

use crate::{facts::ExtractedFacts, language::Language, transcript::ASSISTANT_TAG};

pub const DEFAULT_REGISTRATION_URL: &str = "http://localhost/capy-ventas/pos/login";

/// Who the assistant is and what it may talk about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub assistant_name: &'static str,
    pub product: &'static str,
    pub domain: &'static str,
    /// Call-to-action link, copied into every prompt unchanged.
    pub registration_url: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            assistant_name: ASSISTANT_TAG,
            product: "Capy Ventas",
            domain: "point of sale (POS), inventory, CRM, sales reports, \
                     multi-branch control, plans, pricing and benefits",
            registration_url: DEFAULT_REGISTRATION_URL.to_owned(),
        }
    }
}

impl Persona {
    pub fn with_registration_url(mut self, url: impl Into<String>) -> Self {
        self.registration_url = url.into();
        self
    }
}

/// Composes prompts for one persona and one topic-table source language.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    persona: Persona,
    context_language: Language,
}

impl PromptComposer {
    pub fn new(persona: Persona, context_language: Language) -> Self {
        Self {
            persona,
            context_language,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn compose(
        &self,
        facts: &ExtractedFacts,
        language: Language,
        context: &str,
        history_tail: &[String],
        user_text: &str,
    ) -> ComposedPrompt {
        let text = PromptChain::new()
            .with(RoleSection(&self.persona))
            .with(RulesSection {
                persona: &self.persona,
                facts,
                language,
                has_context: !context.trim().is_empty(),
                context_language: self.context_language,
            })
            .with(FactsSection { facts, language })
            .with(ContextSection(context))
            .with(HistorySection(history_tail))
            .with(UserMessageSection(user_text))
            .build();

        ComposedPrompt(text)
    }
}

/// Compose with the default persona and a Spanish topic table.
pub fn compose_prompt(
    facts: &ExtractedFacts,
    language: Language,
    context: &str,
    history_tail: &[String],
    user_text: &str,
) -> String {
    PromptComposer::default()
        .compose(facts, language, context, history_tail, user_text)
        .into_text()
}

/// Finished prompt text. Sent to the model as a single user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl IntoPrompt for ComposedPrompt {
    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![GenericMessage::new(self.0, GenericRole::User)]
    }
}

struct RoleSection<'a>(&'a Persona);

impl PromptFragment for RoleSection<'_> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        let persona = self.0;
        builder
            .add_section_h1("Role")
            .add_line(format_args!(
                "You are {}, a friendly assistant for {}.",
                persona.assistant_name, persona.product
            ))
            .add_line(format_args!(
                "Your only domain is {}: {}.",
                persona.product, persona.domain
            ))
    }
}

struct RulesSection<'a> {
    persona: &'a Persona,
    facts: &'a ExtractedFacts,
    language: Language,
    has_context: bool,
    context_language: Language,
}

impl RulesSection<'_> {
    fn rules(&self) -> Vec<(&'static str, String)> {
        let phrases = self.language.phrases();
        let product = self.persona.product;
        let mut rules = vec![
            (
                "LANGUAGE",
                format!(
                    "Respond only in {}, whatever language earlier messages used.",
                    self.language.name()
                ),
            ),
            (
                "SCOPE",
                format!("Only answer questions about {product}."),
            ),
            (
                "OFF-TOPIC",
                format!(
                    "If the user asks about anything unrelated to {product}, reply exactly: \"{}\"",
                    phrases.refusal
                ),
            ),
        ];

        let name_rule = match (&self.facts.user_name, self.facts.greeting_done) {
            (Some(name), _) => format!("The user's name is {name}. Address them by name."),
            (None, false) => format!(
                "The user's name is unknown. Greet them briefly and ask for their name with: \"{}\"",
                phrases.name_request
            ),
            (None, true) => {
                "You already asked for the user's name. Do not ask again.".to_owned()
            }
        };
        rules.push(("NAME", name_rule));

        if self.has_context {
            let mut context_rule = "Base your answer on the information in the Context section.".to_owned();
            if self.context_language != self.language {
                context_rule.push_str(&format!(
                    " That information is written in {}; translate it accurately into {}.",
                    self.context_language.name(),
                    self.language.name()
                ));
            }
            rules.push(("CONTEXT", context_rule));
        }

        rules.push((
            "STYLE",
            "Keep replies short, friendly and concise; emojis are welcome. \
             Do not list every service unless asked."
                .to_owned(),
        ));
        rules.push((
            "SIGN-UP",
            format!(
                "When inviting the user to sign up or log in, share this link exactly as written: {}",
                self.persona.registration_url
            ),
        ));
        rules
    }
}

impl PromptFragment for RulesSection<'_> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        self.rules()
            .into_iter()
            .enumerate()
            .fold(builder.add_section_h2("Rules"), |b, (i, (label, text))| {
                b.add_numbered(i + 1, label, text)
            })
    }
}

struct FactsSection<'a> {
    facts: &'a ExtractedFacts,
    language: Language,
}

impl PromptFragment for FactsSection<'_> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        builder
            .add_section_h2("Facts")
            .add_key_value(
                "User name",
                self.facts.user_name.as_deref().unwrap_or("Unknown"),
            )
            .add_key_value("Target language", self.language.name())
    }
}

struct ContextSection<'a>(&'a str);

impl PromptFragment for ContextSection<'_> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        let context = self.0.trim();
        if context.is_empty() {
            return builder;
        }
        builder.add_section_h2("Context").add_line(context)
    }
}

struct HistorySection<'a>(&'a [String]);

impl PromptFragment for HistorySection<'_> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        if self.0.is_empty() {
            return builder;
        }
        builder.add_section_h2("Chat history").add_lines(self.0)
    }
}

struct UserMessageSection<'a>(&'a str);

impl PromptFragment for UserMessageSection<'_> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        builder
            .add_key_value("USER", self.0)
            .add_line("ASSISTANT:")
    }
}
