//! Language of the latest user message.
//!
//! Detection uses [`whatlang`]'s trigram model restricted to the languages
//! CapyBot can answer in. Chat messages are short, and on short text the
//! reported confidence is low even when the top candidate is right, so the
//! top candidate is taken as-is. Only text with no usable result (empty,
//! symbols, another script) yields the configured fallback language.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use whatlang::{Detector, Lang};

use crate::phrases::Phrases;

/// Confidence floor applied by default. Zero keeps every candidate.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.0;

/// Closed set of languages CapyBot answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// English display name, as used inside the prompt instructions.
    pub fn name(self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::English => "English",
        }
    }

    pub fn phrases(self) -> &'static Phrases {
        Phrases::for_language(self)
    }

    fn whatlang(self) -> Lang {
        match self {
            Language::Spanish => Lang::Spa,
            Language::English => Lang::Eng,
        }
    }

    fn from_whatlang(lang: Lang) -> Option<Self> {
        Language::ALL.into_iter().find(|l| l.whatlang() == lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language `{0}` (expected one of: es, en)")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spa" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            "en" | "eng" | "english" | "inglés" | "ingles" => Ok(Language::English),
            _ => Err(ParseLanguageError(s.to_owned())),
        }
    }
}

/// Statistical short-text language identifier with a fixed fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageDetector {
    fallback: Language,
    min_confidence: f64,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageDetector {
    pub fn new(fallback: Language) -> Self {
        Self {
            fallback,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn fallback(&self) -> Language {
        self.fallback
    }

    pub fn detect(&self, text: &str) -> Language {
        let allowlist = Language::ALL.iter().map(|l| l.whatlang()).collect();
        let Some(info) = Detector::with_allowlist(allowlist).detect(text) else {
            debug!(fallback = %self.fallback, "language detection returned nothing");
            return self.fallback;
        };

        if info.confidence() < self.min_confidence {
            debug!(
                candidate = ?info.lang(),
                confidence = info.confidence(),
                fallback = %self.fallback,
                "language detection below threshold"
            );
            return self.fallback;
        }

        Language::from_whatlang(info.lang()).unwrap_or(self.fallback)
    }
}

/// Detect with the default detector (Spanish fallback).
pub fn detect_language(text: &str) -> Language {
    LanguageDetector::default().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_clear_english() {
        let text = "Could you please tell me which features your point of sale \
                    system offers for restaurants and small shops?";
        assert_eq!(detect_language(text), Language::English);
    }

    #[test]
    fn detects_clear_spanish() {
        let text = "Hola, quisiera saber cuáles son las funcionalidades que ofrece \
                    el sistema para los restaurantes y las tiendas pequeñas.";
        assert_eq!(detect_language(text), Language::Spanish);
    }

    #[test]
    fn short_english_questions_are_english() {
        for text in [
            "What plans do you have?",
            "hello, my name is John",
            "Can I use it in my restaurant?",
            "what features does it have",
            "price",
        ] {
            assert_eq!(detect_language(text), Language::English, "{text}");
        }
    }

    #[test]
    fn short_spanish_questions_are_spanish() {
        for text in [
            "¿Cuánto cuesta el plan para mi restaurante?",
            "¿Qué beneficios tiene el sistema?",
            "Hola, quiero saber más sobre los precios",
        ] {
            assert_eq!(detect_language(text), Language::Spanish, "{text}");
        }
    }

    #[test]
    fn empty_or_symbol_text_falls_back() {
        assert_eq!(detect_language(""), Language::Spanish);
        assert_eq!(detect_language("   "), Language::Spanish);
        assert_eq!(
            LanguageDetector::new(Language::English).detect("?!"),
            Language::English
        );
    }

    #[test]
    fn unreachable_threshold_always_falls_back() {
        let detector = LanguageDetector::new(Language::English).with_min_confidence(1.1);
        let text = "Hola, quisiera saber cuáles son las funcionalidades del sistema.";
        assert_eq!(detector.detect(text), Language::English);
    }

    #[test]
    fn parses_config_values() {
        assert_eq!("es".parse::<Language>(), Ok(Language::Spanish));
        assert_eq!(" English ".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::English.to_string(), "en");
    }
}
