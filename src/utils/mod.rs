//! Shared utilities: code generation, URL normalization, short-URL
//! construction, and database error classification.

pub mod code_generator;
pub mod db_error;
pub mod short_url;
pub mod url_normalizer;
