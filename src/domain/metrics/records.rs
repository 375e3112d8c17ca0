//! Metric kinds and the raw records gathered for one title.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::reducers::{self, PageReadRate};
use crate::domain::entities::{DailyAdSnapshot, PageReadStatement, RoyaltyStatement};

/// A scalar that can be totalled over a date range or charted per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Impressions,
    Clicks,
    AdSpend,
    UnitsSold,
    /// Royalty amount.
    SalesRevenue,
    PagesRead,
    /// Pages read converted at the per-page rate.
    PageReadRevenue,
    /// Royalty amount plus page-read revenue.
    CombinedRevenue,
}

impl MetricKind {
    pub const ALL: [MetricKind; 8] = [
        MetricKind::Impressions,
        MetricKind::Clicks,
        MetricKind::AdSpend,
        MetricKind::UnitsSold,
        MetricKind::SalesRevenue,
        MetricKind::PagesRead,
        MetricKind::PageReadRevenue,
        MetricKind::CombinedRevenue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
            Self::AdSpend => "ad_spend",
            Self::UnitsSold => "units_sold",
            Self::SalesRevenue => "sales_revenue",
            Self::PagesRead => "pages_read",
            Self::PageReadRevenue => "page_read_revenue",
            Self::CombinedRevenue => "combined_revenue",
        }
    }

    /// Whether computing this kind requires ad snapshots.
    pub fn needs_snapshots(&self) -> bool {
        matches!(self, Self::Impressions | Self::Clicks | Self::AdSpend)
    }

    /// Whether computing this kind requires royalty statements.
    pub fn needs_royalties(&self) -> bool {
        matches!(
            self,
            Self::UnitsSold | Self::SalesRevenue | Self::CombinedRevenue
        )
    }

    /// Whether computing this kind requires page-read statements.
    pub fn needs_page_reads(&self) -> bool {
        matches!(
            self,
            Self::PagesRead | Self::PageReadRevenue | Self::CombinedRevenue
        )
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(MetricKind::as_str).collect();
                format!("unknown metric '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// Every record of each kind that matched one title and date filter.
///
/// Collections not needed for a given query are left empty.
#[derive(Debug, Clone, Default)]
pub struct TitleRecords {
    pub snapshots: Vec<DailyAdSnapshot>,
    pub royalties: Vec<RoyaltyStatement>,
    pub page_reads: Vec<PageReadStatement>,
}

impl TitleRecords {
    /// Reduces the records to a single total for `kind`.
    pub fn total(&self, kind: MetricKind, rate: PageReadRate) -> f64 {
        match kind {
            MetricKind::Impressions => reducers::ad_performance(&self.snapshots).impressions,
            MetricKind::Clicks => reducers::ad_performance(&self.snapshots).clicks,
            MetricKind::AdSpend => reducers::ad_spend(&self.snapshots),
            MetricKind::UnitsSold => reducers::units_sold(&self.royalties),
            MetricKind::SalesRevenue => reducers::royalties(&self.royalties),
            MetricKind::PagesRead => reducers::pages_read(&self.page_reads),
            MetricKind::PageReadRevenue => rate.to_dollars(reducers::pages_read(&self.page_reads)),
            MetricKind::CombinedRevenue => reducers::total_earnings(
                reducers::royalties(&self.royalties),
                reducers::pages_read(&self.page_reads),
                rate,
            ),
        }
    }

    /// Per-day totals for `kind`, keyed and ordered by date.
    ///
    /// Several records on the same day collapse into one entry.
    pub fn daily_totals(&self, kind: MetricKind, rate: PageReadRate) -> BTreeMap<NaiveDate, f64> {
        let mut daily = BTreeMap::new();
        let mut add = |date: NaiveDate, value: f64| {
            *daily.entry(date).or_insert(0.0) += value;
        };

        if kind.needs_snapshots() {
            for snapshot in &self.snapshots {
                let value = match kind {
                    MetricKind::Impressions => snapshot.impressions.unwrap_or(0.0),
                    MetricKind::Clicks => snapshot.clicks.unwrap_or(0.0),
                    _ => snapshot.total_spend(),
                };
                add(snapshot.date, value);
            }
        }

        if kind.needs_royalties() {
            for statement in &self.royalties {
                let value = match kind {
                    MetricKind::UnitsSold => statement.net_units_sold.unwrap_or(0.0),
                    _ => statement.royalty.unwrap_or(0.0),
                };
                add(statement.royalty_date, value);
            }
        }

        if kind.needs_page_reads() {
            for statement in &self.page_reads {
                let pages = statement.pages_read.unwrap_or(0.0);
                let value = match kind {
                    MetricKind::PagesRead => pages,
                    _ => rate.to_dollars(pages),
                };
                add(statement.order_date, value);
            }
        }

        daily
    }
}
