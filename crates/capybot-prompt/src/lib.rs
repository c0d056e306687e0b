//! Helpers for assembling prompt text: a fluent [`PromptBuilder`] for single
//! sections and a [`PromptChain`] that lines several fragments up in order.
pub mod builder;
pub mod chain;

pub use builder::PromptBuilder;
pub use chain::{PromptChain, PromptFragment};
