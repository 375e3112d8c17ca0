//! Per-book and per-series result types.

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use super::ratios::{self, ClickThrough, Conversion, Roi};
use super::reducers::{self, AdPerformance, PageReadRate};
use super::records::TitleRecords;
use crate::domain::entities::CatalogEntry;

/// The additive metrics of one book or of a whole series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricTotals {
    pub impressions: f64,
    pub clicks: f64,
    pub units_sold: f64,
    pub pages_read: f64,
    pub units_sold_via_page_reads: f64,
    pub ad_spend: f64,
    pub royalties: f64,
    pub earnings: f64,
}

impl MetricTotals {
    /// Folds one book's records into totals.
    ///
    /// `full_read_page_count` converts pages read into whole-book units.
    pub fn from_records(records: &TitleRecords, full_read_page_count: f64, rate: PageReadRate) -> Self {
        let perf = reducers::ad_performance(&records.snapshots);
        let pages_read = reducers::pages_read(&records.page_reads);
        let royalties = reducers::royalties(&records.royalties);

        Self {
            impressions: perf.impressions,
            clicks: perf.clicks,
            units_sold: reducers::units_sold(&records.royalties),
            pages_read,
            units_sold_via_page_reads: reducers::units_sold_via_page_reads(
                pages_read,
                full_read_page_count,
            ),
            ad_spend: reducers::ad_spend(&records.snapshots),
            royalties,
            earnings: reducers::total_earnings(royalties, pages_read, rate),
        }
    }

    /// Sales plus page-read equivalents.
    pub fn units_sold_total(&self) -> f64 {
        self.units_sold + self.units_sold_via_page_reads
    }

    pub fn click_through(&self) -> ClickThrough {
        ratios::click_through(AdPerformance {
            impressions: self.impressions,
            clicks: self.clicks,
        })
    }

    pub fn conversion(&self) -> Conversion {
        ratios::conversion(self.clicks, self.units_sold_total())
    }

    pub fn roi(&self) -> Roi {
        ratios::roi(self.earnings, self.ad_spend)
    }
}

impl Add for MetricTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for MetricTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.impressions += rhs.impressions;
        self.clicks += rhs.clicks;
        self.units_sold += rhs.units_sold;
        self.pages_read += rhs.pages_read;
        self.units_sold_via_page_reads += rhs.units_sold_via_page_reads;
        self.ad_spend += rhs.ad_spend;
        self.royalties += rhs.royalties;
        self.earnings += rhs.earnings;
    }
}

impl Sum for MetricTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Ratios derived from a set of totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedRatios {
    pub click_through: ClickThrough,
    pub conversion: Conversion,
    pub roi: Roi,
}

impl From<&MetricTotals> for DerivedRatios {
    fn from(totals: &MetricTotals) -> Self {
        Self {
            click_through: totals.click_through(),
            conversion: totals.conversion(),
            roi: totals.roi(),
        }
    }
}

/// Full metrics for one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookMetrics {
    pub title: String,
    pub series: Option<String>,
    pub series_number: Option<u32>,
    pub totals: MetricTotals,
    #[serde(flatten)]
    pub ratios: DerivedRatios,
    /// Successor sales over this book's sales, zero when undefined.
    pub read_through: f64,
}

impl BookMetrics {
    /// Assembles the result for `entry`.
    ///
    /// `successor` holds the next book's totals when the entry has one.
    pub fn new(entry: &CatalogEntry, totals: MetricTotals, successor: Option<&MetricTotals>) -> Self {
        Self {
            title: entry.title.clone(),
            series: entry.series_name().map(str::to_owned),
            series_number: entry.series_number,
            ratios: DerivedRatios::from(&totals),
            read_through: ratios::read_through(
                totals.units_sold_total(),
                successor.map(MetricTotals::units_sold_total),
            ),
            totals,
        }
    }
}

/// Rollup over every book in a series.
///
/// Ratios are recomputed from the summed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesMetrics {
    pub series_name: String,
    pub books: Vec<BookMetrics>,
    pub totals: MetricTotals,
    #[serde(flatten)]
    pub ratios: DerivedRatios,
}

impl SeriesMetrics {
    pub fn new(series_name: impl Into<String>, books: Vec<BookMetrics>) -> Self {
        let totals: MetricTotals = books.iter().map(|b| b.totals).sum();
        Self {
            series_name: series_name.into(),
            ratios: DerivedRatios::from(&totals),
            books,
            totals,
        }
    }
}

/// Orders best return first. "No ad spend" ranks above any percentage.
pub fn by_roi_descending(a: &Roi, b: &Roi) -> Ordering {
    b.rank().total_cmp(&a.rank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DailyAdSnapshot, PageReadStatement, RoyaltyStatement};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, day).unwrap()
    }

    fn totals(clicks: f64, units: f64, spend: f64, earnings: f64) -> MetricTotals {
        MetricTotals {
            clicks,
            units_sold: units,
            ad_spend: spend,
            earnings,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_records() {
        let records = TitleRecords {
            snapshots: vec![
                DailyAdSnapshot::new("c", d(1))
                    .with_impressions(500.0)
                    .with_clicks(10.0)
                    .with_average_cpc(0.5),
            ],
            royalties: vec![RoyaltyStatement::new("Book", d(1), Some(2.0), Some(7.0))],
            page_reads: vec![PageReadStatement::new("Book", d(1), Some(1000.0))],
        };

        let t = MetricTotals::from_records(&records, 250.0, PageReadRate::STANDARD);

        assert_eq!(t.impressions, 500.0);
        assert_eq!(t.clicks, 10.0);
        assert_eq!(t.ad_spend, 5.0);
        assert_eq!(t.units_sold, 2.0);
        assert_eq!(t.units_sold_via_page_reads, 4.0);
        assert_eq!(t.units_sold_total(), 6.0);
        assert!((t.earnings - 11.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_records_give_zeros_and_sentinels() {
        let t = MetricTotals::from_records(&TitleRecords::default(), 300.0, PageReadRate::STANDARD);

        assert_eq!(t, MetricTotals::default());
        assert_eq!(t.click_through(), ClickThrough::NoClicks);
        assert_eq!(t.conversion(), Conversion::NoClicks);
        assert_eq!(t.roi(), Roi::NoAdSpend);
    }

    #[test]
    fn test_sum_is_fieldwise() {
        let sum: MetricTotals = [totals(1.0, 2.0, 3.0, 4.0), totals(10.0, 20.0, 30.0, 40.0)]
            .into_iter()
            .sum();
        assert_eq!(sum, totals(11.0, 22.0, 33.0, 44.0));
    }

    #[test]
    fn test_book_metrics_read_through() {
        let entry = CatalogEntry::new("Book One", "A").in_series("Saga", 1);
        let next = totals(0.0, 3.0, 0.0, 0.0);

        let metrics = BookMetrics::new(&entry, totals(0.0, 6.0, 0.0, 0.0), Some(&next));
        assert_eq!(metrics.read_through, 0.5);
        assert_eq!(metrics.series.as_deref(), Some("Saga"));

        let last = BookMetrics::new(&entry, totals(0.0, 6.0, 0.0, 0.0), None);
        assert_eq!(last.read_through, 0.0);
    }

    #[test]
    fn test_series_ratios_recomputed_from_sums() {
        let a = CatalogEntry::new("A", "x").in_series("S", 1);
        let b = CatalogEntry::new("B", "x").in_series("S", 2);
        let books = vec![
            BookMetrics::new(&a, totals(10.0, 1.0, 10.0, 30.0), None),
            BookMetrics::new(&b, totals(30.0, 9.0, 30.0, 10.0), None),
        ];

        let series = SeriesMetrics::new("S", books);

        assert_eq!(series.totals.clicks, 40.0);
        assert_eq!(series.ratios.conversion, Conversion::ClicksPerSale(4.0));
        assert_eq!(series.ratios.roi, Roi::Percent(0.0));
    }

    #[test]
    fn test_empty_series_is_zero() {
        let series = SeriesMetrics::new("Nothing", Vec::new());
        assert_eq!(series.totals, MetricTotals::default());
        assert_eq!(series.ratios.roi, Roi::NoAdSpend);
    }

    #[test]
    fn test_roi_ordering() {
        let mut rois = vec![Roi::Percent(-50.0), Roi::NoAdSpend, Roi::Percent(20.0)];
        rois.sort_by(by_roi_descending);
        assert_eq!(rois, vec![Roi::NoAdSpend, Roi::Percent(20.0), Roi::Percent(-50.0)]);
    }
}
