use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One entry of a chat conversation, e.g. `{"role": "user", "content": "..."}`.
///
/// Entries supplied by callers are kept as the raw JSON value they arrived as
/// and forwarded to the gateway untouched, whatever their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatMessage(Value);

impl ChatMessage {
    pub fn new(role: &str, content: &str) -> Self {
        Self(json!({ "role": role, "content": content }))
    }

    pub fn system(content: &str) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: &str) -> Self {
        Self::new("user", content)
    }
}

impl From<Value> for ChatMessage {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
