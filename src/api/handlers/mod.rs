//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod conversions;
pub mod health;
pub mod series;

pub use books::{
    ad_history_handler, book_daily_handler, book_metrics_handler, book_range_handler,
    clicks_per_sale_handler, moving_average_handler, roi_handler,
};
pub use conversions::{
    conversions_handler, series_conversions_handler, unlinked_campaigns_handler,
};
pub use health::health_handler;
pub use series::{series_metrics_handler, series_range_handler};
