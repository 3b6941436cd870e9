//! Domain error type and caller-facing failure messages.

mod error;

pub use error::*;
