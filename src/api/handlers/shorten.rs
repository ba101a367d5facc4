//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::{display_url, resolve_short_url};

/// Creates a shortened URL for a single long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "https://s.example/aB3xZ9",
///   "display_url": "s.example/aB3xZ9"
/// }
/// ```
///
/// The short URL uses the configured `BASE_URL` when present; otherwise it
/// is derived from the request's `Host` and `X-Forwarded-Proto` headers.
///
/// # Errors
///
/// Returns 400 when the URL fails validation, 500 when the store fails or
/// code allocation is exhausted. Non-POST requests receive 405 from the
/// method router.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.links.shorten(&payload.url).await?;

    let short_url = resolve_short_url(state.base_url.as_deref(), &headers, &link.code)?;
    let display_url = display_url(&short_url);

    Ok(Json(ShortenResponse {
        short_url,
        display_url,
    }))
}
