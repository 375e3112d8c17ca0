//! Repository trait definitions for the domain layer.
//!
//! These traits are the record-store access contract the analytics engine is
//! written against. Every query is read-only; absent data yields an empty
//! collection, never an error.
//!
//! # Architecture
//!
//! - Traits define the contract for data access
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CatalogRepository`] - Books, by title or series
//! - [`CampaignRepository`] - Campaigns, by linked title
//! - [`AdSnapshotRepository`] - Daily ad snapshots, by campaign and date
//! - [`RoyaltyRepository`] - Royalty statements, by main title and date
//! - [`PageReadRepository`] - Page-read statements, by main title and date

pub mod ad_snapshot_repository;
pub mod campaign_repository;
pub mod catalog_repository;
pub mod date_filter;
pub mod page_read_repository;
pub mod record_store;
pub mod royalty_repository;

pub use ad_snapshot_repository::AdSnapshotRepository;
pub use campaign_repository::CampaignRepository;
pub use catalog_repository::CatalogRepository;
pub use date_filter::DateFilter;
pub use page_read_repository::PageReadRepository;
pub use record_store::RecordStore;
pub use royalty_repository::RoyaltyRepository;

#[cfg(test)]
pub use ad_snapshot_repository::MockAdSnapshotRepository;
#[cfg(test)]
pub use campaign_repository::MockCampaignRepository;
#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use page_read_repository::MockPageReadRepository;
#[cfg(test)]
pub use royalty_repository::MockRoyaltyRepository;
