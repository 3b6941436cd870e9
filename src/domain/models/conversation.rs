use serde::Deserialize;
use serde_json::Value;

use super::persona::{START_PROMPT, SYSTEM_PROMPT};
use super::ChatMessage;
use crate::domain::DomainError;

/// Inbound payload: `{ "messages"?: [...], "isStart"?: bool }`.
///
/// `messages` stays raw until a continuing conversation needs it, so a start
/// request ignores it whatever its shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewRequest {
    #[serde(default)]
    messages: Option<Value>,
    #[serde(default, rename = "isStart")]
    is_start: Option<bool>,
}

impl InterviewRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body)
            .map_err(|e| DomainError::invalid_input(format!("request body is not valid: {e}")))
    }

    pub fn is_start(&self) -> bool {
        self.is_start.unwrap_or(false)
    }

    pub fn message_count(&self) -> usize {
        self.messages
            .as_ref()
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Resolve into a conversation. A start request discards any history it carries.
    pub fn into_conversation(self) -> Result<Conversation, DomainError> {
        if self.is_start() {
            return Ok(Conversation::Start);
        }
        match self.messages {
            Some(Value::Array(entries)) => Ok(Conversation::Continue(
                entries.into_iter().map(ChatMessage::from).collect(),
            )),
            Some(Value::Null) | None => Err(DomainError::invalid_input(
                "messages is required unless isStart is true",
            )),
            Some(_) => Err(DomainError::invalid_input("messages must be an array")),
        }
    }
}

/// The two ways an exchange with the interviewer can begin.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversation {
    /// Open a new interview with the synthetic start turn.
    Start,
    /// Continue with the caller's history, forwarded in order.
    Continue(Vec<ChatMessage>),
}

impl Conversation {
    /// Outbound message list; the system prompt is always first.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        match self {
            Conversation::Start => vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(START_PROMPT),
            ],
            Conversation::Continue(history) => {
                let mut messages = Vec::with_capacity(history.len() + 1);
                messages.push(ChatMessage::system(SYSTEM_PROMPT));
                messages.extend(history.iter().cloned());
                messages
            }
        }
    }
}
