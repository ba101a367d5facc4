//! Database integration.

pub mod persistence;
