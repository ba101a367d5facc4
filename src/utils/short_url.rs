//! Public short-URL construction.
//!
//! Computes the externally visible short URL for a freshly allocated code,
//! honoring a configured base URL and reverse-proxy headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Builds the public short URL for `code`.
///
/// # Resolution
///
/// - When `base_url` is configured, any trailing `/` is trimmed and the
///   result is `{base_url}/{code}`.
/// - Otherwise the URL is derived from the request: scheme is `https` when
///   `X-Forwarded-Proto: https` is present (TLS terminates at the reverse
///   proxy), `http` otherwise; host is the `Host` header verbatim, port
///   included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when `base_url` is unset and the
/// request carries no usable `Host` header.
pub fn resolve_short_url(
    base_url: Option<&str>,
    headers: &HeaderMap,
    code: &str,
) -> Result<String, AppError> {
    if let Some(base) = base_url {
        return Ok(format!("{}/{}", base.trim_end_matches('/'), code));
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?;

    let forwarded_https = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"));

    let scheme = if forwarded_https { "https" } else { "http" };

    Ok(format!("{}://{}/{}", scheme, host, code))
}

/// Returns `short_url` with any leading `http://` or `https://` removed,
/// for UI presentation.
pub fn display_url(short_url: &str) -> String {
    short_url
        .strip_prefix("https://")
        .or_else(|| short_url.strip_prefix("http://"))
        .unwrap_or(short_url)
        .to_string()
}
