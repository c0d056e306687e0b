//! Facts recovered from the transcript on every request.
//!
//! Name policy: the **earliest** user line whose text is one or two
//! whitespace-separated tokens is taken as the user's name. This is a
//! heuristic; a one-word answer to an unrelated question (or a bare "hola")
//! is read as a name too.
//!
//! Greeting policy: the name request has happened once any assistant line
//! contains the name-request phrase of a supported language
//! (case-insensitive substring match, typographic apostrophes folded to `'`).
use crate::{
    language::Language,
    transcript::{Transcript, Turn},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFacts {
    pub user_name: Option<String>,
    pub greeting_done: bool,
}

impl ExtractedFacts {
    pub fn from_transcript(transcript: &Transcript) -> Self {
        Self {
            user_name: extract_name(transcript),
            greeting_done: greeting_done(transcript),
        }
    }
}

pub fn extract_name(transcript: &Transcript) -> Option<String> {
    transcript
        .turns()
        .filter(Turn::is_user)
        .find_map(|turn| name_declaration(&turn.text))
}

pub fn greeting_done(transcript: &Transcript) -> bool {
    let markers: Vec<String> = Language::ALL
        .iter()
        .map(|l| normalize(l.phrases().name_request))
        .collect();

    transcript.turns().filter(Turn::is_assistant).any(|turn| {
        let text = normalize(&turn.text);
        markers.iter().any(|marker| text.contains(marker.as_str()))
    })
}

fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

fn name_declaration(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    matches!(tokens.len(), 1 | 2).then(|| tokens.join(" "))
}
