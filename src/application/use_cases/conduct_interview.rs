use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::application::{ChatClient, SecretProvider};
use crate::domain::{
    ChatCompletionRequest, DomainError, GatewaySettings, InterviewReply, InterviewRequest,
};

/// Relays one interview exchange: persona + conversation out, interviewer reply back.
pub struct ConductInterviewUseCase {
    chat_client: Arc<dyn ChatClient>,
    secrets: Arc<dyn SecretProvider>,
    settings: GatewaySettings,
}

impl ConductInterviewUseCase {
    pub fn new(
        chat_client: Arc<dyn ChatClient>,
        secrets: Arc<dyn SecretProvider>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            chat_client,
            secrets,
            settings,
        }
    }

    pub async fn execute(&self, request: InterviewRequest) -> Result<InterviewReply, DomainError> {
        info!(
            "Interview request: {} messages, isStart={}",
            request.message_count(),
            request.is_start()
        );

        let api_key = match self.secrets.api_key() {
            Some(key) => key,
            None => {
                error!("{} is not configured", self.secrets.name());
                return Err(DomainError::configuration(format!(
                    "{} is not configured",
                    self.secrets.name()
                )));
            }
        };

        let conversation = request.into_conversation()?;
        let outbound = ChatCompletionRequest::new(&self.settings, &conversation);
        debug!(
            "Sending {} messages to model {}",
            outbound.messages().len(),
            outbound.model()
        );

        let start_time = Instant::now();
        let text = match self.chat_client.complete(&api_key, &outbound).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Interview exchange failed: {e}");
                return Err(e);
            }
        };

        info!(
            "Interviewer replied with {} chars in {:?}",
            text.len(),
            start_time.elapsed()
        );
        Ok(InterviewReply::new(text))
    }
}
