//! Repository trait for daily ad-performance snapshots.

use crate::domain::entities::DailyAdSnapshot;
use crate::domain::repositories::DateFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to daily ad snapshots, keyed by campaign name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdSnapshotRepository: Send + Sync {
    /// Returns the snapshots of one campaign that pass `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_campaign(
        &self,
        campaign_name: &str,
        filter: DateFilter,
    ) -> Result<Vec<DailyAdSnapshot>, AppError>;
}
