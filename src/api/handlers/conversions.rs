//! Handlers for the catalog-wide listings.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

use crate::api::dto::query::WindowParams;
use crate::api::dto::reports::{
    ConversionsResponse, SeriesConversionsResponse, UnlinkedCampaignsResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Every book with impressions in the window, best ROI first.
///
/// # Endpoint
///
/// `GET /api/conversions?window=30days`
///
/// # Query Parameters
///
/// - `window` (optional): `all` (default) or `<N>days`, counted back from today (UTC)
pub async fn conversions_handler(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> Result<Json<ConversionsResponse>, AppError> {
    let today = Utc::now().date_naive();
    let books = state.ad_service.conversions(params.window, today).await?;

    Ok(Json(ConversionsResponse {
        window: params.window,
        books,
    }))
}

/// Every series with impressions in the window, best ROI first.
///
/// # Endpoint
///
/// `GET /api/series-conversions?window=90days`
pub async fn series_conversions_handler(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> Result<Json<SeriesConversionsResponse>, AppError> {
    let today = Utc::now().date_naive();
    let series = state
        .series_service
        .series_conversions(params.window, today)
        .await?;

    Ok(Json(SeriesConversionsResponse {
        window: params.window,
        series,
    }))
}

/// Campaigns not linked to any book, by name.
///
/// # Endpoint
///
/// `GET /api/campaigns/unlinked`
pub async fn unlinked_campaigns_handler(
    State(state): State<AppState>,
) -> Result<Json<UnlinkedCampaignsResponse>, AppError> {
    let campaigns = state.ad_service.unlinked_campaigns().await?;
    Ok(Json(UnlinkedCampaignsResponse { campaigns }))
}
