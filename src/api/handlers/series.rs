//! Handlers for series rollups.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::query::{MetricRangeParams, SinceParams};
use crate::api::dto::reports::RangeResponse;
use crate::domain::metrics::SeriesMetrics;
use crate::error::AppError;
use crate::state::AppState;

/// Rollup of every book in a series.
///
/// # Endpoint
///
/// `GET /api/series/{name}/metrics?since=2018-08-01`
///
/// An unknown series is not an error; it rolls up to zeros.
pub async fn series_metrics_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<SinceParams>,
) -> Result<Json<SeriesMetrics>, AppError> {
    let rollup = state
        .series_service
        .series_metrics(&name, params.since)
        .await?;
    Ok(Json(rollup))
}

/// One metric summed over every book in a series.
///
/// # Endpoint
///
/// `GET /api/series/{name}/range?metric=combined_revenue&start=2018-08-01&end=2018-08-31`
pub async fn series_range_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<MetricRangeParams>,
) -> Result<Json<RangeResponse>, AppError> {
    let total = state
        .earnings_service
        .series_range_metric(&name, params.metric, params.range.start, params.range.end)
        .await?;

    Ok(Json(RangeResponse {
        subject: name,
        metric: params.metric,
        start: params.range.start,
        end: params.range.end,
        total: total.total,
    }))
}
