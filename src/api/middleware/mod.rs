//! Cross-cutting HTTP middleware.

pub mod security_headers;
pub mod tracing;
