//! Repository trait for royalty statements.

use crate::domain::entities::RoyaltyStatement;
use crate::domain::repositories::DateFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to royalty statements, keyed by canonical main title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoyaltyRepository: Send + Sync {
    /// Returns the statements whose main title equals `main_title` and whose
    /// royalty date passes `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_title(
        &self,
        main_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<RoyaltyStatement>, AppError>;
}
