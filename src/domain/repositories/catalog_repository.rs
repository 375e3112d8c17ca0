//! Repository trait for catalog entries.

use crate::domain::entities::CatalogEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the book catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCatalogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryRecordStore`] - in-process snapshot
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Returns every catalog entry, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_all(&self) -> Result<Vec<CatalogEntry>, AppError>;

    /// Finds the entry with exactly this title.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(CatalogEntry))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_title(&self, title: &str) -> Result<Option<CatalogEntry>, AppError>;

    /// Returns all entries whose series field equals `series`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_series(&self, series: &str) -> Result<Vec<CatalogEntry>, AppError>;

    /// Counts catalog entries. Used by health checks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;
}
