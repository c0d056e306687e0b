//! Typed view over the caller-maintained transcript.
//!
//! On the wire the transcript is a flat list of `"{tag}: {text}"` strings.
//! [`Transcript`] keeps those raw lines untouched (earlier lines are never
//! rewritten) and exposes them as parsed [`Turn`]s for the rest of the crate.
//! New turns are encoded with the canonical tags `User` and `CapyBot`.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical tag written for user lines.
pub const USER_TAG: &str = "User";
/// Canonical tag written for assistant lines.
pub const ASSISTANT_TAG: &str = "CapyBot";

const USER_ALIASES: &[&str] = &[USER_TAG, "Usuario"];
const ASSISTANT_ALIASES: &[&str] = &[ASSISTANT_TAG, "Assistant"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn tag(self) -> &'static str {
        match self {
            Speaker::User => USER_TAG,
            Speaker::Assistant => ASSISTANT_TAG,
        }
    }

    /// Case-insensitive lookup over the known aliases of each speaker.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let matches = |aliases: &[&str]| aliases.iter().any(|a| a.eq_ignore_ascii_case(tag));

        if matches(USER_ALIASES) {
            Some(Speaker::User)
        } else if matches(ASSISTANT_ALIASES) {
            Some(Speaker::Assistant)
        } else {
            None
        }
    }
}

/// One parsed transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    /// Parse a `"{tag}: {text}"` line. Returns `None` if the part before the
    /// first `:` is not a known speaker tag.
    pub fn parse(line: &str) -> Option<Self> {
        let (tag, text) = line.split_once(':')?;
        let speaker = Speaker::from_tag(tag)?;
        Some(Self {
            speaker,
            text: text.trim().to_owned(),
        })
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }

    pub fn is_assistant(&self) -> bool {
        self.speaker == Speaker::Assistant
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker.tag(), self.text)
    }
}

/// Ordered, append-only conversation log, oldest line first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Raw lines exactly as supplied (plus anything appended since).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parsed turns in transcript order. Untagged lines are skipped.
    pub fn turns(&self) -> impl DoubleEndedIterator<Item = Turn> + '_ {
        self.lines.iter().filter_map(|line| Turn::parse(line))
    }

    /// The last `n` raw lines (all of them if there are fewer).
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }

    pub fn push(&mut self, turn: Turn) {
        self.lines.push(turn.to_string());
    }

    /// Append one completed exchange: the user line, then the assistant line.
    pub fn record_exchange(&mut self, question: &str, reply: &str) {
        self.push(Turn::user(question));
        self.push(Turn::assistant(reply));
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for Transcript {
    fn from(lines: Vec<String>) -> Self {
        Self::from_lines(lines)
    }
}
