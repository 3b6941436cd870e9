use thiserror::Error;

/// Shown to callers when the gateway reports HTTP 429.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait a moment and try again.";
/// Shown to callers when the gateway reports HTTP 402.
pub const USAGE_LIMIT_MESSAGE: &str = "Usage limit reached. Please add credits to continue.";

const RATE_LIMIT_STATUS: u16 = 429;
const USAGE_LIMIT_STATUS: u16 = 402;
const INTERNAL_STATUS: u16 = 500;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Gateway rate limit exceeded (status {status})")]
    RateLimited { status: u16 },

    #[error("Gateway usage limit reached (status {status})")]
    UsageLimit { status: u16 },

    #[error("AI gateway error: {status}")]
    Upstream { status: u16 },

    #[error("No response from AI")]
    MalformedReply,

    #[error("Gateway request failed: {0}")]
    Transport(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Classify a non-success gateway status. 429 and 402 are passed through to
    /// the caller; every other status collapses into a generic upstream failure.
    pub fn from_gateway_status(status: u16) -> Self {
        match status {
            RATE_LIMIT_STATUS => Self::RateLimited { status },
            USAGE_LIMIT_STATUS => Self::UsageLimit { status },
            _ => Self::Upstream { status },
        }
    }

    /// HTTP status returned to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::RateLimited { status } | Self::UsageLimit { status } => *status,
            _ => INTERNAL_STATUS,
        }
    }

    /// Short message placed in the caller-facing `{"error": ...}` body.
    pub fn public_message(&self) -> String {
        match self {
            Self::RateLimited { .. } => RATE_LIMIT_MESSAGE.to_string(),
            Self::UsageLimit { .. } => USAGE_LIMIT_MESSAGE.to_string(),
            Self::Configuration(msg) | Self::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_passes_status_through() {
        let err = DomainError::from_gateway_status(429);
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.public_message(), RATE_LIMIT_MESSAGE);
    }

    #[test]
    fn usage_limit_passes_status_through() {
        let err = DomainError::from_gateway_status(402);
        assert_eq!(err.status_code(), 402);
        assert_eq!(err.public_message(), USAGE_LIMIT_MESSAGE);
    }

    #[test]
    fn other_gateway_statuses_become_500() {
        for status in [400, 401, 403, 404, 500, 502, 503] {
            let err = DomainError::from_gateway_status(status);
            assert!(matches!(err, DomainError::Upstream { .. }));
            assert_eq!(err.status_code(), 500);
            assert!(err.public_message().contains(&status.to_string()));
        }
    }

    #[test]
    fn local_failures_are_500() {
        assert_eq!(DomainError::configuration("x").status_code(), 500);
        assert_eq!(DomainError::invalid_input("x").status_code(), 500);
        assert_eq!(DomainError::MalformedReply.status_code(), 500);
        assert_eq!(DomainError::transport("x").status_code(), 500);
    }

    #[test]
    fn configuration_message_is_returned_verbatim() {
        let err = DomainError::configuration("LOVABLE_API_KEY is not configured");
        assert_eq!(err.public_message(), "LOVABLE_API_KEY is not configured");
    }
}
