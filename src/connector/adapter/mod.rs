mod env_secret_provider;
mod gateway_client;

pub use env_secret_provider::*;
pub use gateway_client::*;
