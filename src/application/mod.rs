//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating record-store
//! reads and pure metric computation. Services consume the repository traits
//! through a [`crate::domain::repositories::RecordStore`] and provide a clean
//! API for HTTP handlers and the report CLI.
//!
//! # Available Services
//!
//! - [`services::join_resolver::JoinResolver`] - Title to campaign, snapshot and statement joins
//! - [`services::ad_service::AdService`] - Per-book metrics, conversions, clicks per sale
//! - [`services::earnings_service::EarningsService`] - Range totals, daily series, moving averages, ROI
//! - [`services::series_service::SeriesService`] - Series rollups

pub mod services;
