use capybot_core::error::CapyError;
use capybot_core::generic::{GenericMessage, GenericRole};
use capybot_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
        }
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl TryFrom<ChatCompleteParameters> for ChatCompletionRequest {
    type Error = CapyError;

    fn try_from(value: ChatCompleteParameters) -> Result<Self, Self::Error> {
        let model = map_model(&value.model).ok_or_else(|| CapyError::ModelNotSupported {
            provider: "openai-compatible",
            model: value.model.to_string(),
        })?;

        Ok(Self {
            model: model.into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content,
            role: value.role.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    FunctionCall,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System => GenericRole::System,
            MessageRole::Assistant => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content.unwrap_or_default(),
            name: value.name,
        }
    }
}
