//! Null-safe folds over record collections.
//!
//! Every reducer treats an absent numeric field as zero. Record order never
//! affects the result.

use serde::Serialize;

use crate::domain::entities::{DailyAdSnapshot, PageReadStatement, RoyaltyStatement};

/// Payout per subscription page read.
///
/// A fixed constant of the subscription service, passed to the services that
/// convert page reads into money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageReadRate(f64);

impl PageReadRate {
    /// Standard per-page payout in dollars.
    pub const STANDARD: Self = Self(0.0046);

    pub const fn per_page(self) -> f64 {
        self.0
    }

    /// Converts a page count into dollars.
    pub fn to_dollars(self, pages: f64) -> f64 {
        pages * self.0
    }
}

impl Default for PageReadRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Impressions and clicks summed over a set of snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AdPerformance {
    pub impressions: f64,
    pub clicks: f64,
}

impl AdPerformance {
    /// Adds one snapshot, each field independently.
    pub fn add(self, snapshot: &DailyAdSnapshot) -> Self {
        Self {
            impressions: self.impressions + snapshot.impressions.unwrap_or(0.0),
            clicks: self.clicks + snapshot.clicks.unwrap_or(0.0),
        }
    }
}

pub fn ad_performance<'a>(snapshots: impl IntoIterator<Item = &'a DailyAdSnapshot>) -> AdPerformance {
    snapshots
        .into_iter()
        .fold(AdPerformance::default(), AdPerformance::add)
}

/// Sum of `clicks × average_cpc` over the snapshots.
pub fn ad_spend<'a>(snapshots: impl IntoIterator<Item = &'a DailyAdSnapshot>) -> f64 {
    snapshots
        .into_iter()
        .map(DailyAdSnapshot::total_spend)
        .sum()
}

pub fn units_sold<'a>(statements: impl IntoIterator<Item = &'a RoyaltyStatement>) -> f64 {
    statements
        .into_iter()
        .map(|s| s.net_units_sold.unwrap_or(0.0))
        .sum()
}

/// Royalty amount summed over the statements.
pub fn royalties<'a>(statements: impl IntoIterator<Item = &'a RoyaltyStatement>) -> f64 {
    statements
        .into_iter()
        .map(|s| s.royalty.unwrap_or(0.0))
        .sum()
}

pub fn pages_read<'a>(statements: impl IntoIterator<Item = &'a PageReadStatement>) -> f64 {
    statements
        .into_iter()
        .map(|s| s.pages_read.unwrap_or(0.0))
        .sum()
}

/// Whole-book equivalents of a page-read total.
///
/// Zero when the page-count constant is below one page.
pub fn units_sold_via_page_reads(pages_read: f64, full_read_page_count: f64) -> f64 {
    if full_read_page_count >= 1.0 {
        pages_read / full_read_page_count
    } else {
        0.0
    }
}

/// Royalties plus page reads converted at `rate`.
pub fn total_earnings(royalties: f64, pages_read: f64, rate: PageReadRate) -> f64 {
    royalties + rate.to_dollars(pages_read)
}
