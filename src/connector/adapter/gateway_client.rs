use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatCompletionRequest, DomainError};

/// Chat-completion endpoint of the hosted AI gateway.
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
/// Enough room for a 1-3 sentence interviewer reply.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Minimal subset of the OpenAI-style chat-completion response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ApiResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|text| !text.is_empty())
    }
}

/// HTTP client for an OpenAI-compatible chat-completion gateway.
///
/// Sends exactly one `POST` per call with a bearer token. No retries and no
/// timeouts beyond reqwest's defaults; a slow gateway keeps the request open.
///
/// Status handling:
///
/// | Gateway status | Result                          |
/// |----------------|---------------------------------|
/// | 2xx            | `choices[0].message.content`    |
/// | 429            | [`DomainError::RateLimited`]    |
/// | 402            | [`DomainError::UsageLimit`]     |
/// | anything else  | [`DomainError::Upstream`]       |
pub struct GatewayChatClient {
    client: reqwest::Client,
    url: String,
}

impl GatewayChatClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ChatClient for GatewayChatClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("GatewayChatClient: request to {} failed: {e}", self.url);
                DomainError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            warn!("GatewayChatClient: gateway returned {status}: {body}");
            return Err(DomainError::from_gateway_status(status.as_u16()));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            warn!("GatewayChatClient: failed to parse gateway response: {e}");
            DomainError::MalformedReply
        })?;

        match api_response.into_text() {
            Some(text) => {
                debug!("GatewayChatClient raw reply: {text}");
                Ok(text)
            }
            None => {
                warn!("GatewayChatClient: gateway response has no choices[0].message.content");
                Err(DomainError::MalformedReply)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<ApiResponse>(body).unwrap().into_text()
    }

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#;
        assert_eq!(parse(body).as_deref(), Some("first"));
    }

    #[test]
    fn missing_pieces_yield_none() {
        assert_eq!(parse(r#"{}"#), None);
        assert_eq!(parse(r#"{"choices":[]}"#), None);
        assert_eq!(parse(r#"{"choices":[{}]}"#), None);
        assert_eq!(parse(r#"{"choices":[{"message":{}}]}"#), None);
        assert_eq!(parse(r#"{"choices":[{"message":{"content":null}}]}"#), None);
    }

    #[test]
    fn empty_content_counts_as_missing() {
        assert_eq!(parse(r#"{"choices":[{"message":{"content":""}}]}"#), None);
    }
}
