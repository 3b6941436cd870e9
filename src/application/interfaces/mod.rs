mod chat_client;
mod secret_provider;

pub use chat_client::*;
pub use secret_provider::*;
