//! In-process record store.
//!
//! Holds an immutable snapshot of all five collections and answers every
//! repository query by scanning it. Used by the integration tests and for
//! small fixtures where standing up PostgreSQL is not worth it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    Campaign, CatalogEntry, DailyAdSnapshot, PageReadStatement, RoyaltyStatement,
};
use crate::domain::repositories::{
    AdSnapshotRepository, CampaignRepository, CatalogRepository, DateFilter, PageReadRepository,
    RecordStore, RoyaltyRepository,
};
use crate::error::AppError;

/// Read-only snapshot of the record store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    catalog: Vec<CatalogEntry>,
    campaigns: Vec<Campaign>,
    snapshots: Vec<DailyAdSnapshot>,
    royalties: Vec<RoyaltyStatement>,
    page_reads: Vec<PageReadStatement>,
}

impl InMemoryRecordStore {
    pub fn builder() -> InMemoryRecordStoreBuilder {
        InMemoryRecordStoreBuilder::default()
    }

    /// Wraps the snapshot as a [`RecordStore`] serving all five collections.
    pub fn into_record_store(self) -> RecordStore {
        RecordStore::from_backend(Arc::new(self))
    }
}

/// Collects records for an [`InMemoryRecordStore`].
#[derive(Debug, Default)]
pub struct InMemoryRecordStoreBuilder {
    store: InMemoryRecordStore,
}

impl InMemoryRecordStoreBuilder {
    pub fn book(mut self, entry: CatalogEntry) -> Self {
        self.store.catalog.push(entry);
        self
    }

    pub fn campaign(mut self, campaign: Campaign) -> Self {
        self.store.campaigns.push(campaign);
        self
    }

    pub fn snapshot(mut self, snapshot: DailyAdSnapshot) -> Self {
        self.store.snapshots.push(snapshot);
        self
    }

    pub fn snapshots(mut self, snapshots: impl IntoIterator<Item = DailyAdSnapshot>) -> Self {
        self.store.snapshots.extend(snapshots);
        self
    }

    pub fn royalty(mut self, statement: RoyaltyStatement) -> Self {
        self.store.royalties.push(statement);
        self
    }

    pub fn page_read(mut self, statement: PageReadStatement) -> Self {
        self.store.page_reads.push(statement);
        self
    }

    pub fn build(self) -> InMemoryRecordStore {
        self.store
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRecordStore {
    async fn find_all(&self) -> Result<Vec<CatalogEntry>, AppError> {
        Ok(self.catalog.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<CatalogEntry>, AppError> {
        Ok(self.catalog.iter().find(|e| e.title == title).cloned())
    }

    async fn find_by_series(&self, series: &str) -> Result<Vec<CatalogEntry>, AppError> {
        Ok(self
            .catalog
            .iter()
            .filter(|e| e.series.as_deref() == Some(series))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.catalog.len() as i64)
    }
}

#[async_trait]
impl CampaignRepository for InMemoryRecordStore {
    async fn find_all(&self) -> Result<Vec<Campaign>, AppError> {
        Ok(self.campaigns.clone())
    }

    async fn find_linked_to_title(&self, book_title: &str) -> Result<Vec<Campaign>, AppError> {
        if book_title.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .campaigns
            .iter()
            .filter(|c| c.book_title.as_deref() == Some(book_title))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AdSnapshotRepository for InMemoryRecordStore {
    async fn find_by_campaign(
        &self,
        campaign_name: &str,
        filter: DateFilter,
    ) -> Result<Vec<DailyAdSnapshot>, AppError> {
        Ok(self
            .snapshots
            .iter()
            .filter(|s| s.campaign_name == campaign_name && filter.matches(s.date))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoyaltyRepository for InMemoryRecordStore {
    async fn find_by_title(
        &self,
        main_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<RoyaltyStatement>, AppError> {
        Ok(self
            .royalties
            .iter()
            .filter(|s| s.main_title == main_title && filter.matches(s.royalty_date))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PageReadRepository for InMemoryRecordStore {
    async fn find_by_title(
        &self,
        main_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<PageReadStatement>, AppError> {
        Ok(self
            .page_reads
            .iter()
            .filter(|s| s.main_title == main_title && filter.matches(s.order_date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, day).unwrap()
    }

    fn store() -> RecordStore {
        InMemoryRecordStore::builder()
            .book(CatalogEntry::new("Dead Reckoning", "A").in_series("Saga", 1))
            .campaign(Campaign::new("linked", "SP", d(1)).linked_to("Dead Reckoning"))
            .campaign(Campaign::new("unlinked", "SP", d(1)))
            .snapshot(DailyAdSnapshot::new("linked", d(10)).with_clicks(1.0))
            .snapshot(DailyAdSnapshot::new("linked", d(11)).with_clicks(2.0))
            .royalty(RoyaltyStatement::new("Dead Reckoning: A Thriller", d(10), Some(1.0), None))
            .page_read(PageReadStatement::new("Dead Reckoning", d(12), Some(50.0)))
            .build()
            .into_record_store()
    }

    #[tokio::test]
    async fn test_catalog_queries() {
        let store = store();

        assert_eq!(store.catalog.count().await.unwrap(), 1);
        assert!(store.catalog.find_by_title("Dead Reckoning").await.unwrap().is_some());
        assert!(store.catalog.find_by_title("Dead").await.unwrap().is_none());
        assert_eq!(store.catalog.find_by_series("Saga").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_linked_campaigns_only() {
        let store = store();

        let linked = store
            .campaigns
            .find_linked_to_title("Dead Reckoning")
            .await
            .unwrap();
        assert_eq!(linked.len(), 1);
        assert!(store.campaigns.find_linked_to_title("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_date_filters_applied() {
        let store = store();

        let after = store
            .snapshots
            .find_by_campaign("linked", DateFilter::After(d(10)))
            .await
            .unwrap();
        assert_eq!(after.len(), 1);

        let between = store
            .snapshots
            .find_by_campaign("linked", DateFilter::Between(d(10), d(11)))
            .await
            .unwrap();
        assert_eq!(between.len(), 2);
    }

    #[tokio::test]
    async fn test_statements_match_on_main_title() {
        let store = store();

        let royalties = store
            .royalties
            .find_by_title("Dead Reckoning", DateFilter::All)
            .await
            .unwrap();
        assert_eq!(royalties.len(), 1);
        assert_eq!(royalties[0].title, "Dead Reckoning: A Thriller");
    }
}
