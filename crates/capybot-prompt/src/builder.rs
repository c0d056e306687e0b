//! Builder‐style helper for constructing **prompt sections**.
//!
//! Writing long instruction strings inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the layout. Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use capybot_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_section_h1("Mission Briefing")
//!     .add_key_value("Priority", "High")
//!     .add_numbered(1, "SCOPE", "stay on topic")
//!     .finalize();
//!
//! assert_eq!(text, "# Mission Briefing\nPriority: High\n1. SCOPE: stay on topic\n");
//! ```
//!
//! The builder performs no smart-formatting: newlines and whitespace are
//! emitted exactly as requested, which keeps the output byte-for-byte
//! predictable.

use std::fmt::Display;

/// Fluent helper to produce prompt text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(self, line: impl Display) -> Self {
        self.add_line(format_args!("# {line}"))
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(self, line: impl Display) -> Self {
        self.add_line(format_args!("## {line}"))
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add every item of `lines` as its own line.
    pub fn add_lines<I>(self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        lines.into_iter().fold(self, |builder, line| builder.add_line(line))
    }

    /// Add a key–value pair: `Key: Value`
    pub fn add_key_value(self, key: impl Display, value: impl Display) -> Self {
        self.add_line(format_args!("{key}: {value}"))
    }

    /// Add a numbered, labelled rule: `1. LABEL: text`
    pub fn add_numbered(self, index: usize, label: impl Display, text: impl Display) -> Self {
        self.add_line(format_args!("{index}. {label}: {text}"))
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_lines_are_emitted_verbatim() {
        let text = PromptBuilder::new()
            .add_section_h2("Chat history")
            .add_lines(["User: hola", "CapyBot: ¡Hola!"])
            .finalize();

        assert_eq!(text, "## Chat history\nUser: hola\nCapyBot: ¡Hola!\n");
    }

    #[test]
    fn empty_builder_finalizes_to_empty_string() {
        let builder = PromptBuilder::default();
        assert!(builder.is_empty());
        assert_eq!(builder.finalize(), "");
    }
}
