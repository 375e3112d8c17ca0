//! Report responses.
//!
//! Ratios serialize as `{"status": "<kind>", "value": x}` for numeric
//! outcomes and `{"status": "no_clicks"}` (or similar) for sentinels.

use chrono::NaiveDate;
use serde::Serialize;

use crate::application::services::{ClicksPerSale, RoiReport};
use crate::domain::entities::{Campaign, DailyAdSnapshot};
use crate::domain::metrics::{
    BookMetrics, DailyValue, LookbackWindow, MetricKind, MovingAverage, SeriesMetrics,
};

/// Advertised books ranked by ROI.
#[derive(Debug, Serialize)]
pub struct ConversionsResponse {
    pub window: LookbackWindow,
    pub books: Vec<BookMetrics>,
}

/// Advertised series ranked by ROI.
#[derive(Debug, Serialize)]
pub struct SeriesConversionsResponse {
    pub window: LookbackWindow,
    pub series: Vec<SeriesMetrics>,
}

/// One metric summed over `[start, end]`.
#[derive(Debug, Serialize)]
pub struct RangeResponse {
    pub subject: String,
    pub metric: MetricKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: f64,
}

/// One metric per day over `[start, end]`.
#[derive(Debug, Serialize)]
pub struct DailySeriesResponse {
    pub title: String,
    pub metric: MetricKind,
    pub values: Vec<DailyValue>,
}

#[derive(Debug, Serialize)]
pub struct MovingAverageResponse {
    pub title: String,
    pub metric: MetricKind,
    pub window: u32,
    #[serde(flatten)]
    pub average: MovingAverage,
}

#[derive(Debug, Serialize)]
pub struct RoiResponse {
    pub title: String,
    pub start: NaiveDate,
    #[serde(flatten)]
    pub report: RoiReport,
}

#[derive(Debug, Serialize)]
pub struct ClicksPerSaleResponse {
    pub title: String,
    pub intervals: Vec<ClicksPerSale>,
}

#[derive(Debug, Serialize)]
pub struct AdHistoryResponse {
    pub title: String,
    pub snapshots: Vec<DailyAdSnapshot>,
}

/// Campaigns awaiting a catalog link.
#[derive(Debug, Serialize)]
pub struct UnlinkedCampaignsResponse {
    pub campaigns: Vec<Campaign>,
}
