//! Request and response types for the HTTP surface.

pub mod health;
pub mod shorten;
