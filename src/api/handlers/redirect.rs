//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;
use serde_json::json;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Codes that cannot have been generated (wrong length or alphabet) are
/// answered with 404 without touching the store.
///
/// # Errors
///
/// Returns 404 when the code is unknown, 500 on store errors.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let link = state.links.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]).into_response())
}
