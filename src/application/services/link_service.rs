//! Link allocation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Upper bound on generate → probe → insert attempts per allocation.
///
/// The loop terminates with probability 1 while the table density stays
/// well below the `62^6` code space; the cap guards against pathological
/// density or a broken probe.
const MAX_ALLOC_ATTEMPTS: usize = 10;

/// Service that allocates fresh short codes and resolves stored ones.
///
/// Orchestrates URL normalization and the generate → probe → insert loop.
/// Correctness does not depend on the probe: the store's unique constraint
/// decides every race, and the service retries only on that conflict.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service over the given store.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Shortens `raw_url`: validates it, allocates a unique code, and
    /// persists the mapping.
    ///
    /// Every successful call mints a fresh code; submitting the same URL
    /// twice yields two independent mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the URL fails normalization,
    /// [`AppError::Internal`] when the store fails or the attempt cap is
    /// exhausted.
    pub async fn shorten(&self, raw_url: &str) -> Result<Link, AppError> {
        let long_url = normalize_url(raw_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "field": "url" })))?;

        self.allocate(long_url).await
    }

    /// Resolves a short code for redirection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown,
    /// [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Store connectivity probe for the health endpoint.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Runs the bounded generate → probe → insert loop.
    async fn allocate(&self, long_url: String) -> Result<Link, AppError> {
        for attempt in 0..MAX_ALLOC_ATTEMPTS {
            let code = generate_code();

            if self.repository.code_exists(&code).await? {
                continue;
            }

            match self
                .repository
                .create(NewLink {
                    code,
                    long_url: long_url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    // Lost the insert race to a concurrent allocator.
                    tracing::warn!(attempt, "code collision on insert, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique code",
            json!({ "attempts": MAX_ALLOC_ATTEMPTS }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::is_valid_code;
    use chrono::Utc;

    fn link_for(new_link: &NewLink) -> Link {
        Link::new(
            1,
            new_link.code.clone(),
            new_link.long_url.clone(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut repo = MockLinkRepository::new();

        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|new_link| Ok(link_for(&new_link)));

        let service = LinkService::new(Arc::new(repo));

        let link = service.shorten("https://example.com/a").await.unwrap();
        assert_eq!(link.long_url, "https://example.com/a");
        assert!(is_valid_code(&link.code));
    }

    #[tokio::test]
    async fn test_shorten_coerces_scheme() {
        let mut repo = MockLinkRepository::new();

        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .withf(|new_link| new_link.long_url == "https://example.com/x")
            .times(1)
            .returning(|new_link| Ok(link_for(&new_link)));

        let service = LinkService::new(Arc::new(repo));

        let link = service.shorten("example.com/x").await.unwrap();
        assert_eq!(link.long_url, "https://example.com/x");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_skips_store() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo));

        let result = service.shorten("https://localhost").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_allocate_skips_occupied_codes() {
        let mut repo = MockLinkRepository::new();

        // First candidate is taken, second is free.
        let mut probes = 0;
        repo.expect_code_exists().times(2).returning(move |_| {
            probes += 1;
            Ok(probes == 1)
        });
        repo.expect_create()
            .times(1)
            .returning(|new_link| Ok(link_for(&new_link)));

        let service = LinkService::new(Arc::new(repo));

        assert!(service.shorten("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_allocate_retries_on_insert_conflict() {
        let mut repo = MockLinkRepository::new();

        repo.expect_code_exists().times(2).returning(|_| Ok(false));

        let mut inserts = 0;
        repo.expect_create().times(2).returning(move |new_link| {
            inserts += 1;
            if inserts == 1 {
                Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": new_link.code }),
                ))
            } else {
                Ok(link_for(&new_link))
            }
        });

        let service = LinkService::new(Arc::new(repo));

        assert!(service.shorten("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_allocate_exhaustion_is_internal_error() {
        let mut repo = MockLinkRepository::new();

        repo.expect_code_exists()
            .times(MAX_ALLOC_ATTEMPTS)
            .returning(|_| Ok(true));
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo));

        let result = service.shorten("https://example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_allocate_surfaces_other_store_errors() {
        let mut repo = MockLinkRepository::new();

        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(repo));

        let result = service.shorten("https://example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(repo));

        let result = service.resolve("aB3xZ9").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_hit_returns_stored_url() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "aB3xZ9")
            .times(1)
            .returning(|code| {
                Ok(Some(Link::new(
                    7,
                    code.to_string(),
                    "https://example.com/a".to_string(),
                    Utc::now(),
                )))
            });

        let service = LinkService::new(Arc::new(repo));

        let link = service.resolve("aB3xZ9").await.unwrap();
        assert_eq!(link.long_url, "https://example.com/a");
    }
}
