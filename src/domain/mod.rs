//! # Domain Layer
//!
//! Conversation model, outbound request shape and error taxonomy.
//! This layer performs no I/O and is independent of HTTP frameworks.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
