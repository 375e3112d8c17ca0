//! API route configuration.

use crate::api::handlers::{
    ad_history_handler, book_daily_handler, book_metrics_handler, book_range_handler,
    clicks_per_sale_handler, conversions_handler, moving_average_handler, roi_handler,
    series_conversions_handler, series_metrics_handler, series_range_handler,
    unlinked_campaigns_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All analytics routes. Every endpoint is a read-only `GET`.
///
/// # Endpoints
///
/// - `GET /books/{title}/metrics`         - Totals and ratios for one book
/// - `GET /books/{title}/range`           - One metric summed over a date range
/// - `GET /books/{title}/daily`           - One metric per day over a date range
/// - `GET /books/{title}/moving-average`  - Trailing average of one metric
/// - `GET /books/{title}/roi`             - ROI over a date range
/// - `GET /books/{title}/clicks-per-sale` - Clicks per sale between royalty statements
/// - `GET /books/{title}/ad-history`      - Daily snapshots of linked campaigns
/// - `GET /conversions`                   - Advertised books ranked by ROI
/// - `GET /series/{name}/metrics`         - Series rollup
/// - `GET /series/{name}/range`           - One metric summed over a series
/// - `GET /series-conversions`            - Advertised series ranked by ROI
/// - `GET /campaigns/unlinked`            - Campaigns not linked to a book
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/books/{title}/metrics", get(book_metrics_handler))
        .route("/books/{title}/range", get(book_range_handler))
        .route("/books/{title}/daily", get(book_daily_handler))
        .route("/books/{title}/moving-average", get(moving_average_handler))
        .route("/books/{title}/roi", get(roi_handler))
        .route("/books/{title}/clicks-per-sale", get(clicks_per_sale_handler))
        .route("/books/{title}/ad-history", get(ad_history_handler))
        .route("/conversions", get(conversions_handler))
        .route("/series/{name}/metrics", get(series_metrics_handler))
        .route("/series/{name}/range", get(series_range_handler))
        .route("/series-conversions", get(series_conversions_handler))
        .route("/campaigns/unlinked", get(unlinked_campaigns_handler))
}
