use async_trait::async_trait;

use crate::domain::{ChatCompletionRequest, DomainError};

/// Sends a chat-completion request to an LLM gateway and returns the reply text.
///
/// Implementors own transport and response decoding. Gateway failures must be
/// reported through [`DomainError::from_gateway_status`] so rate and usage
/// limits reach the caller with their original status.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, DomainError>;
}
