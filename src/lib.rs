pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ConductInterviewUseCase, SecretProvider};

pub use cli::Commands;

pub use connector::{
    build_router, ApiError, Container, ContainerConfig, EnvSecretProvider, GatewayChatClient,
    InterviewController,
};

pub use domain::{
    ChatCompletionRequest, ChatMessage, Conversation, DomainError, GatewaySettings,
    InterviewReply, InterviewRequest, RATE_LIMIT_MESSAGE, START_PROMPT, SYSTEM_PROMPT,
    USAGE_LIMIT_MESSAGE,
};
