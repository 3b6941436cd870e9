//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Gateway client (reqwest, OpenAI-compatible chat completions)
//! - Secret lookup (environment variables)
//! - HTTP API (axum router, controller, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
