//! Daily advertising performance snapshot.

use chrono::NaiveDate;
use serde::Serialize;

/// One day's impressions, clicks and cost for one campaign.
///
/// Every numeric field may be missing in the source report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAdSnapshot {
    pub campaign_name: String,
    pub date: NaiveDate,
    pub impressions: Option<f64>,
    pub clicks: Option<f64>,
    pub average_cpc: Option<f64>,
}

impl DailyAdSnapshot {
    /// Creates a snapshot with all numeric fields absent.
    pub fn new(campaign_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            campaign_name: campaign_name.into(),
            date,
            impressions: None,
            clicks: None,
            average_cpc: None,
        }
    }

    pub fn with_impressions(mut self, impressions: f64) -> Self {
        self.impressions = Some(impressions);
        self
    }

    pub fn with_clicks(mut self, clicks: f64) -> Self {
        self.clicks = Some(clicks);
        self
    }

    pub fn with_average_cpc(mut self, average_cpc: f64) -> Self {
        self.average_cpc = Some(average_cpc);
        self
    }

    /// Spend for the day: average cost per click times clicks, zero if either is absent.
    pub fn total_spend(&self) -> f64 {
        match (self.average_cpc, self.clicks) {
            (Some(cpc), Some(clicks)) => cpc * clicks,
            _ => 0.0,
        }
    }
}
