use crate::application::SecretProvider;

/// Environment variable holding the gateway token unless overridden.
pub const DEFAULT_API_KEY_ENV: &str = "LOVABLE_API_KEY";

/// Reads the gateway token from an environment variable on every call.
///
/// Unset and empty variables are both treated as "not configured".
pub struct EnvSecretProvider {
    var: String,
}

impl EnvSecretProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl SecretProvider for EnvSecretProvider {
    fn name(&self) -> &str {
        &self.var
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_is_missing() {
        let provider = EnvSecretProvider::new("INTERVIEW_RELAY_UNIT_UNSET_KEY");
        assert_eq!(provider.api_key(), None);
        assert_eq!(provider.name(), "INTERVIEW_RELAY_UNIT_UNSET_KEY");
    }

    #[test]
    fn value_is_read_at_call_time() {
        let var = "INTERVIEW_RELAY_UNIT_ROTATING_KEY";
        let provider = EnvSecretProvider::new(var);

        std::env::set_var(var, "first");
        assert_eq!(provider.api_key().as_deref(), Some("first"));

        std::env::set_var(var, "  ");
        assert_eq!(provider.api_key(), None);

        std::env::remove_var(var);
        assert_eq!(provider.api_key(), None);
    }

    #[test]
    fn default_uses_lovable_key() {
        assert_eq!(EnvSecretProvider::default().name(), DEFAULT_API_KEY_ENV);
    }
}
