//! URL normalization and validation.
//!
//! Canonicalizes user-submitted URLs before they are stored and rejects
//! anything that cannot be redirected to safely.

use url::Url;

/// Errors that can occur while normalizing a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    InvalidScheme,

    #[error("URL host must be a dotted hostname")]
    InvalidHost,
}

/// Normalizes a submitted URL to the form that is stored and redirected to.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed; empty input is rejected
/// 2. Inputs without an `http://` / `https://` prefix get `https://` prepended
/// 3. The result must parse as an absolute URL with scheme `http` or `https`
/// 4. The host must be non-empty and contain at least one `.`
///
/// Rule 4 blocks `localhost`, bare hostnames, and similar internal
/// references from being stored as redirect targets.
///
/// The returned string is stored verbatim: apart from the scheme prefix no
/// rewriting is applied, so the redirect target is exactly what the caller
/// submitted.
///
/// # Errors
///
/// Returns a [`UrlValidationError`] describing the first rule violated.
/// All variants surface as `400 Bad Request` at the HTTP boundary.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("example.com/x").unwrap(),
///     "https://example.com/x"
/// );
/// assert!(normalize_url("https://localhost").is_err());
/// assert!(normalize_url("javascript:alert(1)").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let candidate = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::InvalidScheme),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() && host.contains('.') => {}
        _ => return Err(UrlValidationError::InvalidHost),
    }

    Ok(candidate)
}
