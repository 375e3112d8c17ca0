//! Domain layer containing business entities and logic.
//!
//! This module follows Clean Architecture principles. It defines the record
//! kinds the analytics engine reads, the repository contracts used to read
//! them, and the pure metric computations applied to them, independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Catalog, campaign, snapshot and statement records
//! - [`repositories`] - Read-only data access trait definitions
//! - [`metrics`] - Reducers, ratios, windows and result types
//! - [`title`] - Canonical title keys used for joins
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])
//!
//! # Report Flow
//!
//! 1. A service resolves a title to its catalog entry and linked campaigns
//! 2. Snapshots and statements are fetched concurrently via [`repositories::RecordStore`]
//! 3. [`metrics`] folds the records into totals and derived ratios
//! 4. The result is returned as a value; nothing is persisted

pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod title;
