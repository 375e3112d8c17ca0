//! Repository trait for subscription page-read statements.

use crate::domain::entities::PageReadStatement;
use crate::domain::repositories::DateFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to page-read statements, keyed by canonical main title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageReadRepository: Send + Sync {
    /// Returns the statements whose main title equals `main_title` and whose
    /// order date passes `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_title(
        &self,
        main_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<PageReadStatement>, AppError>;
}
