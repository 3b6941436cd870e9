use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, ConductInterviewUseCase, SecretProvider};
use crate::connector::adapter::{
    EnvSecretProvider, GatewayChatClient, DEFAULT_API_KEY_ENV, DEFAULT_GATEWAY_URL,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
use crate::domain::GatewaySettings;

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerConfig {
    /// Full chat-completion endpoint URL.
    pub gateway_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Name of the environment variable holding the bearer token.
    ///
    /// Only the name is stored; the value is read per request.
    pub api_key_env: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl ContainerConfig {
    /// Build from environment variables, falling back to the defaults:
    ///
    /// | Variable             | Default                                              |
    /// |----------------------|------------------------------------------------------|
    /// | `GATEWAY_URL`        | `https://ai.gateway.lovable.dev/v1/chat/completions` |
    /// | `GATEWAY_MODEL`      | `google/gemini-2.5-flash`                            |
    /// | `GATEWAY_MAX_TOKENS` | `300`                                                |
    ///
    /// An unparsable `GATEWAY_MAX_TOKENS` is ignored with a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_tokens = match std::env::var("GATEWAY_MAX_TOKENS") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid GATEWAY_MAX_TOKENS={raw:?}, using {}",
                    defaults.max_tokens
                );
                defaults.max_tokens
            }),
            Err(_) => defaults.max_tokens,
        };
        Self {
            gateway_url: std::env::var("GATEWAY_URL").unwrap_or(defaults.gateway_url),
            model: std::env::var("GATEWAY_MODEL").unwrap_or(defaults.model),
            max_tokens,
            api_key_env: defaults.api_key_env,
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    secrets: Arc<dyn SecretProvider>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        debug!(
            "Using gateway {} with model {} (max_tokens={}, key from ${})",
            config.gateway_url, config.model, config.max_tokens, config.api_key_env
        );
        let chat_client = Arc::new(GatewayChatClient::new(config.gateway_url.clone()));
        let secrets = Arc::new(EnvSecretProvider::new(config.api_key_env.clone()));
        Self::with_components(config, chat_client, secrets)
    }

    /// Wire explicit components, e.g. a fake client in tests.
    pub fn with_components(
        config: ContainerConfig,
        chat_client: Arc<dyn ChatClient>,
        secrets: Arc<dyn SecretProvider>,
    ) -> Self {
        Self {
            chat_client,
            secrets,
            config,
        }
    }

    pub fn interview_use_case(&self) -> ConductInterviewUseCase {
        ConductInterviewUseCase::new(
            self.chat_client.clone(),
            self.secrets.clone(),
            GatewaySettings::new(self.config.model.clone(), self.config.max_tokens),
        )
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }
}
