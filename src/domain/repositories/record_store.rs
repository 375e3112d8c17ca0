//! Bundle of the five record-store collections.

use std::sync::Arc;

use super::{
    AdSnapshotRepository, CampaignRepository, CatalogRepository, PageReadRepository,
    RoyaltyRepository,
};

/// Handles to every collection the analytics engine reads from.
///
/// Cloning is cheap: each handle is reference counted. A single backend may
/// serve all five collections, in which case every field points at the same
/// object (see [`RecordStore::from_backend`]).
#[derive(Clone)]
pub struct RecordStore {
    pub catalog: Arc<dyn CatalogRepository>,
    pub campaigns: Arc<dyn CampaignRepository>,
    pub snapshots: Arc<dyn AdSnapshotRepository>,
    pub royalties: Arc<dyn RoyaltyRepository>,
    pub page_reads: Arc<dyn PageReadRepository>,
}

impl RecordStore {
    /// Creates a store from individual collection handles.
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        snapshots: Arc<dyn AdSnapshotRepository>,
        royalties: Arc<dyn RoyaltyRepository>,
        page_reads: Arc<dyn PageReadRepository>,
    ) -> Self {
        Self {
            catalog,
            campaigns,
            snapshots,
            royalties,
            page_reads,
        }
    }

    /// Creates a store served entirely by one backend.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: CatalogRepository
            + CampaignRepository
            + AdSnapshotRepository
            + RoyaltyRepository
            + PageReadRepository
            + 'static,
    {
        Self {
            catalog: backend.clone(),
            campaigns: backend.clone(),
            snapshots: backend.clone(),
            royalties: backend.clone(),
            page_reads: backend,
        }
    }
}
