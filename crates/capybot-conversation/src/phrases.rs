//! Per-language canned sentences.
//!
//! The composer and the orchestrator only ever pick a [`Phrases`] entry by
//! [`Language`]; none of their logic branches on the language itself.
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrases {
    /// Sentence the assistant uses to ask for the user's name. Also the
    /// marker that tells us the name request already happened.
    pub name_request: &'static str,
    /// Reply to an empty question.
    pub empty_question_reply: &'static str,
    /// Fixed answer to out-of-domain questions.
    pub refusal: &'static str,
    /// Substitute for an empty model reply.
    pub clarification: &'static str,
}

static SPANISH: Phrases = Phrases {
    name_request: "¿Cómo te llamas?",
    empty_question_reply: "¡Hola! 😊 ¿Cómo te llamas?",
    refusal: "Lo siento, solo puedo ayudarte con temas relacionados a Capy Ventas. 😊",
    clarification: "No entendí tu mensaje, ¿podrías aclararlo, por favor?",
};

static ENGLISH: Phrases = Phrases {
    name_request: "What's your name?",
    empty_question_reply: "Hi! 😊 What's your name?",
    refusal: "Sorry, I can only help with topics related to Capy Ventas. 😊",
    clarification: "I didn't understand your message, could you please clarify?",
};

impl Phrases {
    pub fn for_language(language: Language) -> &'static Phrases {
        match language {
            Language::Spanish => &SPANISH,
            Language::English => &ENGLISH,
        }
    }
}
