use serde::Serialize;

/// Successful relay result, serialized as `{"response": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewReply {
    response: String,
}

impl InterviewReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
