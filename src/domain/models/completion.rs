use serde::Serialize;

use super::{ChatMessage, Conversation};

/// Fixed gateway parameters applied to every outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    model: String,
    max_tokens: u32,
}

impl GatewaySettings {
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

/// Body of the outbound chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn new(settings: &GatewaySettings, conversation: &Conversation) -> Self {
        Self {
            model: settings.model().to_string(),
            messages: conversation.to_messages(),
            max_tokens: settings.max_tokens(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
