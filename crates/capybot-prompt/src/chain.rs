//! Simple **builder** that concatenates multiple values implementing
//! [`PromptFragment`] into one text blob.
//!
//! ```text
//! ┌───────────────┐    render     ┌────────────┐
//! │ Persona       │ ─────────────►│ section    │
//! ├───────────────┤               ├────────────┤
//! │ Rules         │ ─────────────►│ section    │
//! ├───────────────┤               ├────────────┤
//! │ …             │ ─────────────►│ section    │
//! └───────────────┘               └────────────┘
//!            ▲                          │
//!            └── PromptChain::build() ◄─┘
//! ```
//!
//! Sections are separated by exactly one blank line. A fragment that renders
//! nothing (e.g. `None`, or an empty context block) leaves no trace, so
//! optional sections don't produce stray blank lines.
//!
//! ```rust
//! use capybot_prompt::chain::PromptChain;
//!
//! let text = PromptChain::new()
//!     .with("You are a helpful bot.")
//!     .with(None::<&str>)
//!     .with(String::from("Convert the text to uppercase."))
//!     .build();
//!
//! assert_eq!(text, "You are a helpful bot.\n\nConvert the text to uppercase.\n");
//! ```
use crate::builder::PromptBuilder;

/// A piece of prompt text that knows how to write itself into a builder.
pub trait PromptFragment {
    fn render(self, builder: PromptBuilder) -> PromptBuilder;
}

/// Static text is written as a single line.
impl PromptFragment for &str {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        builder.add_line(self)
    }
}

impl PromptFragment for String {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        builder.add_line(self)
    }
}

impl<F: PromptFragment> PromptFragment for Option<F> {
    fn render(self, builder: PromptBuilder) -> PromptBuilder {
        match self {
            Some(fragment) => fragment.render(builder),
            None => builder,
        }
    }
}

/// Lightweight container that accumulates rendered sections.
///
/// The field is private so the only way to obtain the result is through
/// [`Self::build`], keeping the API fluent.
#[derive(Debug, Default)]
pub struct PromptChain(Vec<String>);

impl PromptChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Render `fragment` and append it as a new section.
    pub fn with(mut self, fragment: impl PromptFragment) -> Self {
        let section = fragment.render(PromptBuilder::new());
        if !section.is_empty() {
            self.0.push(section.finalize());
        }
        self
    }

    /// Consume the chain and return the assembled text.
    pub fn build(self) -> String {
        self.0.join("\n")
    }
}
