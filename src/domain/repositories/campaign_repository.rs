//! Repository trait for advertising campaigns.

use crate::domain::entities::Campaign;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to advertising campaigns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Returns every campaign, linked or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_all(&self) -> Result<Vec<Campaign>, AppError>;

    /// Returns the campaigns linked to `book_title`.
    ///
    /// An empty title never matches: unlinked campaigns are excluded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_linked_to_title(&self, book_title: &str) -> Result<Vec<Campaign>, AppError>;
}
