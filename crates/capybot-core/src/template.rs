//! Conversion of prompt values into chat messages.
//!
//! The completion client accepts *any* value implementing [`IntoPrompt`], so
//! callers can hand over a composed prompt struct, a single
//! [`GenericMessage`], or a prepared list of messages without wrapping them
//! first.
//!
//! ```rust
//! use capybot_core::template::IntoPrompt;
//! use capybot_core::generic::{GenericMessage, GenericRole};
//!
//! struct Hello;
//!
//! impl IntoPrompt for Hello {
//!     fn into_prompt(self) -> Vec<GenericMessage> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(Hello.into_prompt().len(), 1);
//! ```
use crate::generic::GenericMessage;

/// Converts a value into a series of chat messages.
pub trait IntoPrompt {
    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<GenericMessage>;
}

/// A single [`GenericMessage`] can be passed directly to the client.
impl IntoPrompt for GenericMessage {
    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![self]
    }
}

impl IntoPrompt for Vec<GenericMessage> {
    fn into_prompt(self) -> Vec<GenericMessage> {
        self
    }
}
