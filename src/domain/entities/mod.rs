//! Core domain entities representing the business data model.
//!
//! All five record kinds are created and replaced by the ingestion side; the
//! analytics engine only ever reads them.
//!
//! # Entity Types
//!
//! - [`CatalogEntry`] - A published book, the root join key
//! - [`Campaign`] - An advertising campaign, optionally linked to a book
//! - [`DailyAdSnapshot`] - One day of ad performance for one campaign
//! - [`RoyaltyStatement`] - One day of sales for one title
//! - [`PageReadStatement`] - One day of subscription page reads for one title

pub mod ad_snapshot;
pub mod campaign;
pub mod catalog_entry;
pub mod page_read_statement;
pub mod royalty_statement;

pub use ad_snapshot::DailyAdSnapshot;
pub use campaign::Campaign;
pub use catalog_entry::CatalogEntry;
pub use page_read_statement::PageReadStatement;
pub use royalty_statement::RoyaltyStatement;
