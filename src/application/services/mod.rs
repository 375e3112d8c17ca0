//! Business logic services for the application layer.

pub mod ad_service;
pub mod earnings_service;
pub mod join_resolver;
pub mod series_service;

pub use ad_service::{AdService, ClicksPerSale};
pub use earnings_service::{EarningsService, RoiReport};
pub use join_resolver::{JoinResolver, Sources};
pub use series_service::SeriesService;
