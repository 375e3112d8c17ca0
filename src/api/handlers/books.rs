//! Handlers for single-book reports.
//!
//! Every handler here answers 404 when the title is not in the catalog.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::query::{DateRangeParams, MetricRangeParams, MovingAverageParams, SinceParams};
use crate::api::dto::reports::{
    AdHistoryResponse, ClicksPerSaleResponse, DailySeriesResponse, MovingAverageResponse,
    RangeResponse, RoiResponse,
};
use crate::domain::metrics::BookMetrics;
use crate::error::AppError;
use crate::state::AppState;

/// Totals, ratios and read-through for one book.
///
/// # Endpoint
///
/// `GET /api/books/{title}/metrics?since=2018-08-01`
///
/// `since` is exclusive; without it the whole history is used.
pub async fn book_metrics_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<SinceParams>,
) -> Result<Json<BookMetrics>, AppError> {
    let metrics = state.ad_service.book_metrics(&title, params.since).await?;
    Ok(Json(metrics))
}

/// One metric summed over a closed date range.
///
/// # Endpoint
///
/// `GET /api/books/{title}/range?metric=units_sold&start=2018-08-01&end=2018-08-31`
///
/// # Errors
///
/// Returns 400 Bad Request if `start` is after `end`.
pub async fn book_range_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<MetricRangeParams>,
) -> Result<Json<RangeResponse>, AppError> {
    let DateRangeParams { start, end } = params.range;
    let total = state
        .earnings_service
        .range_metric(&title, params.metric, start, end)
        .await?;

    Ok(Json(RangeResponse {
        subject: title,
        metric: params.metric,
        start,
        end,
        total: total.total,
    }))
}

/// One metric per day, days without records as zero.
///
/// # Endpoint
///
/// `GET /api/books/{title}/daily?metric=clicks&start=2018-08-01&end=2018-08-31`
///
/// # Errors
///
/// Returns 400 Bad Request if the range is inverted or longer than ten years.
pub async fn book_daily_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<MetricRangeParams>,
) -> Result<Json<DailySeriesResponse>, AppError> {
    let values = state
        .earnings_service
        .daily_series(&title, params.metric, params.range.start, params.range.end)
        .await?;

    Ok(Json(DailySeriesResponse {
        title,
        metric: params.metric,
        values,
    }))
}

/// Trailing average of one metric, zero-padded when history is short.
///
/// # Endpoint
///
/// `GET /api/books/{title}/moving-average?metric=pages_read&anchor=2018-08-31&window=7`
///
/// `window` defaults to 7 days and must be within 1..=3650.
pub async fn moving_average_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<MovingAverageParams>,
) -> Result<Json<MovingAverageResponse>, AppError> {
    params.validate()?;

    let window = params.window_days();
    let average = state
        .earnings_service
        .moving_average(&title, params.metric, params.anchor, window)
        .await?;

    Ok(Json(MovingAverageResponse {
        title,
        metric: params.metric,
        window,
        average,
    }))
}

/// ROI over a closed date range.
///
/// # Endpoint
///
/// `GET /api/books/{title}/roi?start=2018-08-01&end=2018-08-31`
pub async fn roi_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<RoiResponse>, AppError> {
    let report = state
        .earnings_service
        .roi(&title, params.start, params.end)
        .await?;

    Ok(Json(RoiResponse {
        title,
        start: params.start,
        report,
    }))
}

/// Clicks per sale between consecutive royalty statements.
///
/// # Endpoint
///
/// `GET /api/books/{title}/clicks-per-sale`
pub async fn clicks_per_sale_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<ClicksPerSaleResponse>, AppError> {
    let intervals = state.ad_service.clicks_per_sale(&title).await?;
    Ok(Json(ClicksPerSaleResponse { title, intervals }))
}

/// Daily snapshots of every campaign linked to the book.
///
/// # Endpoint
///
/// `GET /api/books/{title}/ad-history`
pub async fn ad_history_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<AdHistoryResponse>, AppError> {
    let snapshots = state.ad_service.ad_history(&title).await?;
    Ok(Json(AdHistoryResponse { title, snapshots }))
}
