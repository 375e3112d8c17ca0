//! Series rollups.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use super::join_resolver::JoinResolver;
use crate::domain::entities::CatalogEntry;
use crate::domain::metrics::{
    BookMetrics, LookbackWindow, MetricTotals, PageReadRate, SeriesIndex, SeriesMetrics, summary,
};
use crate::domain::repositories::DateFilter;
use crate::error::AppError;

/// Service rolling per-book metrics up to whole series.
///
/// Additive metrics are summed across books; ratios are recomputed from the
/// sums.
pub struct SeriesService {
    resolver: JoinResolver,
    rate: PageReadRate,
}

impl SeriesService {
    pub fn new(resolver: JoinResolver, rate: PageReadRate) -> Self {
        Self { resolver, rate }
    }

    /// Rollup for one series. A series with no books is all zeros.
    #[tracing::instrument(skip(self))]
    pub async fn series_metrics(
        &self,
        series: &str,
        since: Option<NaiveDate>,
    ) -> Result<SeriesMetrics, AppError> {
        let books = self.resolver.books_in_series(series).await?;
        let filter = DateFilter::since(since);
        let totals = self
            .resolver
            .totals_for_books(&books, filter, self.rate)
            .await?;

        let index = SeriesIndex::build(&books);
        let rollup = SeriesMetrics::new(series, book_metrics(books, &index, &totals));

        debug!(series, books = rollup.books.len(), "Computed series rollup");
        metrics::counter!("analytics_reports_total", "kind" => "series_metrics").increment(1);
        Ok(rollup)
    }

    /// Rollups for every series with impressions in the window, best ROI first.
    #[tracing::instrument(skip(self))]
    pub async fn series_conversions(
        &self,
        window: LookbackWindow,
        today: NaiveDate,
    ) -> Result<Vec<SeriesMetrics>, AppError> {
        let catalog = self.resolver.store().catalog.find_all().await?;
        let filter = DateFilter::since(window.cutoff(today));

        let mut by_series: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();
        for entry in catalog {
            if let Some(name) = entry.series_name().map(str::to_owned) {
                by_series.entry(name).or_default().push(entry);
            }
        }

        let in_series: Vec<CatalogEntry> = by_series.values().flatten().cloned().collect();
        let totals = self
            .resolver
            .totals_for_books(&in_series, filter, self.rate)
            .await?;
        let index = SeriesIndex::build(&in_series);

        let mut rollups: Vec<SeriesMetrics> = by_series
            .into_iter()
            .map(|(name, books)| SeriesMetrics::new(name, book_metrics(books, &index, &totals)))
            .filter(|rollup| rollup.totals.impressions > 0.0)
            .collect();
        rollups.sort_by(|a, b| summary::by_roi_descending(&a.ratios.roi, &b.ratios.roi));

        debug!(series = rollups.len(), %window, "Computed series conversions");
        metrics::counter!("analytics_reports_total", "kind" => "series_conversions").increment(1);
        Ok(rollups)
    }
}

/// Per-book metrics for one series, ordered by position.
fn book_metrics(
    mut books: Vec<CatalogEntry>,
    index: &SeriesIndex,
    totals: &HashMap<String, MetricTotals>,
) -> Vec<BookMetrics> {
    books.sort_by(|a, b| {
        a.series_number
            .unwrap_or(u32::MAX)
            .cmp(&b.series_number.unwrap_or(u32::MAX))
            .then_with(|| a.title.cmp(&b.title))
    });
    books
        .iter()
        .map(|entry| {
            let own = totals.get(&entry.title).copied().unwrap_or_default();
            let next = index
                .successor_of(entry)
                .and_then(|next| totals.get(&next.title));
            BookMetrics::new(entry, own, next)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Campaign, DailyAdSnapshot, RoyaltyStatement};
    use crate::domain::metrics::Roi;
    use crate::domain::repositories::{
        MockAdSnapshotRepository, MockCampaignRepository, MockCatalogRepository,
        MockPageReadRepository, MockRoyaltyRepository, RecordStore,
    };
    use std::sync::Arc;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, day).unwrap()
    }

    fn saga(series: &str) -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Two", "A").in_series(series, 2),
            CatalogEntry::new("One", "A").in_series(series, 1),
        ]
    }

    fn service(catalog: MockCatalogRepository) -> SeriesService {
        let mut campaigns = MockCampaignRepository::new();
        campaigns
            .expect_find_linked_to_title()
            .returning(|t| Ok(vec![Campaign::new(format!("{t} ad"), "SP", d(1)).linked_to(t)]));

        let mut snapshots = MockAdSnapshotRepository::new();
        snapshots.expect_find_by_campaign().returning(|name, _| {
            let clicks = if name.starts_with("One") { 10.0 } else { 20.0 };
            Ok(vec![
                DailyAdSnapshot::new(name, d(2))
                    .with_impressions(clicks * 100.0)
                    .with_clicks(clicks)
                    .with_average_cpc(0.5),
            ])
        });

        let mut royalties = MockRoyaltyRepository::new();
        royalties.expect_find_by_title().returning(|t, _| {
            let units = if t == "One" { 10.0 } else { 4.0 };
            Ok(vec![RoyaltyStatement::new(t, d(2), Some(units), Some(units * 2.0))])
        });

        let mut page_reads = MockPageReadRepository::new();
        page_reads.expect_find_by_title().returning(|_, _| Ok(vec![]));

        let store = RecordStore::new(
            Arc::new(catalog),
            Arc::new(campaigns),
            Arc::new(snapshots),
            Arc::new(royalties),
            Arc::new(page_reads),
        );
        SeriesService::new(JoinResolver::new(store, 2), PageReadRate::STANDARD)
    }

    #[tokio::test]
    async fn test_rollup_is_sum_of_books() {
        let mut catalog = MockCatalogRepository::new();
        catalog
            .expect_find_by_series()
            .returning(|s| Ok(saga(s)));

        let rollup = service(catalog).series_metrics("Saga", None).await.unwrap();

        assert_eq!(rollup.books.len(), 2);
        assert_eq!(rollup.books[0].title, "One");
        assert_eq!(rollup.books[1].title, "Two");

        let impressions: f64 = rollup.books.iter().map(|b| b.totals.impressions).sum();
        assert_eq!(rollup.totals.impressions, impressions);
        assert_eq!(rollup.totals.clicks, 30.0);
        assert_eq!(rollup.totals.units_sold, 14.0);
        assert_eq!(rollup.totals.ad_spend, 15.0);
        assert_eq!(rollup.totals.earnings, 28.0);
    }

    #[tokio::test]
    async fn test_read_through_within_rollup() {
        let mut catalog = MockCatalogRepository::new();
        catalog
            .expect_find_by_series()
            .returning(|s| Ok(saga(s)));

        let rollup = service(catalog).series_metrics("Saga", None).await.unwrap();

        assert_eq!(rollup.books[0].read_through, 0.4);
        assert_eq!(rollup.books[1].read_through, 0.0);
    }

    #[tokio::test]
    async fn test_empty_series_is_zero() {
        let mut catalog = MockCatalogRepository::new();
        catalog.expect_find_by_series().returning(|_| Ok(vec![]));

        let rollup = service(catalog).series_metrics("Nothing", None).await.unwrap();

        assert!(rollup.books.is_empty());
        assert_eq!(rollup.totals, MetricTotals::default());
        assert_eq!(rollup.ratios.roi, Roi::NoAdSpend);
    }

    #[tokio::test]
    async fn test_series_conversions_groups_by_series() {
        let mut catalog = MockCatalogRepository::new();
        catalog.expect_find_all().returning(|| {
            let mut all = saga("Saga");
            all.push(CatalogEntry::new("Loose", "A"));
            Ok(all)
        });

        let rollups = service(catalog)
            .series_conversions(LookbackWindow::Lifetime, d(31))
            .await
            .unwrap();

        assert_eq!(rollups.len(), 1);
        assert_eq!(rollups[0].series_name, "Saga");
        assert_eq!(rollups[0].books.len(), 2);
    }
}
