mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{API_KEY_ENV, DEFAULT_BASE_URL, OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub mod api_v1;
mod client;
pub mod error;
