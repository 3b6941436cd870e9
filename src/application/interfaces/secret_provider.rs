/// Source of the gateway bearer token.
///
/// Looked up on every request, so rotating the secret does not need a restart.
pub trait SecretProvider: Send + Sync {
    /// Name of the secret, used in configuration error messages.
    fn name(&self) -> &str;

    /// Current value, or `None` when it is not configured.
    fn api_key(&self) -> Option<String>;
}
