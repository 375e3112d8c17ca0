//! Record store implementations.
//!
//! Concrete implementations of the domain repository traits. The PostgreSQL
//! repositories use runtime-checked SQLx queries mapped through `FromRow`
//! row types; the in-memory store serves tests and fixtures.
//!
//! # Repositories
//!
//! - [`PgCatalogRepository`] - Book catalog
//! - [`PgCampaignRepository`] - Advertising campaigns
//! - [`PgAdSnapshotRepository`] - Daily ad snapshots
//! - [`PgRoyaltyRepository`] - Royalty statements
//! - [`PgPageReadRepository`] - Page-read statements
//! - [`InMemoryRecordStore`] - All five collections, in process

pub mod memory_store;
pub mod pg_ad_snapshot_repository;
pub mod pg_campaign_repository;
pub mod pg_catalog_repository;
pub mod pg_page_read_repository;
pub mod pg_royalty_repository;

pub use memory_store::{InMemoryRecordStore, InMemoryRecordStoreBuilder};
pub use pg_ad_snapshot_repository::PgAdSnapshotRepository;
pub use pg_campaign_repository::PgCampaignRepository;
pub use pg_catalog_repository::PgCatalogRepository;
pub use pg_page_read_repository::PgPageReadRepository;
pub use pg_royalty_repository::PgRoyaltyRepository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::RecordStore;

/// Builds a [`RecordStore`] backed by PostgreSQL, one repository per collection.
pub fn pg_record_store(pool: Arc<PgPool>) -> RecordStore {
    RecordStore::new(
        Arc::new(PgCatalogRepository::new(pool.clone())),
        Arc::new(PgCampaignRepository::new(pool.clone())),
        Arc::new(PgAdSnapshotRepository::new(pool.clone())),
        Arc::new(PgRoyaltyRepository::new(pool.clone())),
        Arc::new(PgPageReadRepository::new(pool)),
    )
}
