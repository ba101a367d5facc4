//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten; a missing scheme defaults to `https`.
    pub url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Absolute short URL.
    pub short_url: String,
    /// `short_url` without its scheme, for UI presentation.
    pub display_url: String,
}
