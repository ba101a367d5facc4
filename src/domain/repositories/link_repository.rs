//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code → long URL store.
///
/// The unique constraint on `code` enforced by implementations is the
/// single source of truth for allocation correctness: [`Self::code_exists`]
/// is only an optimization to avoid doomed inserts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests use an
///   in-memory fake (`tests/common`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when `code` already exists — the
    /// allocator relies on this being distinguishable from other failures.
    /// Returns [`AppError::Internal`] on any other store error.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Point membership probe for a candidate code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Point read for the redirect path.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Store connectivity probe for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
