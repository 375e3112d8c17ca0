//! Per-book advertising metrics and conversion listings.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use super::join_resolver::JoinResolver;
use crate::domain::entities::{Campaign, DailyAdSnapshot};
use crate::domain::metrics::{BookMetrics, LookbackWindow, PageReadRate, SeriesIndex, summary};
use crate::domain::repositories::DateFilter;
use crate::error::AppError;

/// Clicks needed per unit sold between two consecutive royalty statements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClicksPerSale {
    pub value: f64,
    /// Date of the statement that closes the interval.
    pub date: NaiveDate,
}

/// Service computing per-book ad metrics.
pub struct AdService {
    resolver: JoinResolver,
    rate: PageReadRate,
}

impl AdService {
    pub fn new(resolver: JoinResolver, rate: PageReadRate) -> Self {
        Self { resolver, rate }
    }

    /// Full metrics for one book, restricted to records after `since` when given.
    ///
    /// Read-through compares against the next book in the series over the
    /// same period.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the title is not in the catalog.
    /// Returns [`AppError::Internal`] on store errors.
    #[tracing::instrument(skip(self))]
    pub async fn book_metrics(
        &self,
        book_title: &str,
        since: Option<NaiveDate>,
    ) -> Result<BookMetrics, AppError> {
        let entry = self.resolver.catalog_entry(book_title).await?;
        let filter = DateFilter::since(since);

        let siblings = match entry.series_name() {
            Some(series) => self.resolver.books_in_series(series).await?,
            None => Vec::new(),
        };
        let index = SeriesIndex::build(&siblings);
        let successor = index.successor_of(&entry);

        let (totals, successor_totals) = tokio::try_join!(
            self.resolver.book_totals(&entry, filter, self.rate),
            async {
                match successor {
                    Some(next) => self.resolver.book_totals(next, filter, self.rate).await.map(Some),
                    None => Ok(None),
                }
            }
        )?;

        metrics::counter!("analytics_reports_total", "kind" => "book_metrics").increment(1);
        Ok(BookMetrics::new(&entry, totals, successor_totals.as_ref()))
    }

    /// Metrics for every advertised book, best return on ad spend first.
    ///
    /// Books with no impressions in the window are left out.
    #[tracing::instrument(skip(self))]
    pub async fn conversions(
        &self,
        window: LookbackWindow,
        today: NaiveDate,
    ) -> Result<Vec<BookMetrics>, AppError> {
        let catalog = self.resolver.store().catalog.find_all().await?;
        let filter = DateFilter::since(window.cutoff(today));
        let index = SeriesIndex::build(&catalog);

        let totals = self
            .resolver
            .totals_for_books(&catalog, filter, self.rate)
            .await?;

        let mut books: Vec<BookMetrics> = catalog
            .iter()
            .filter_map(|entry| {
                let own = totals.get(&entry.title)?;
                if own.impressions <= 0.0 {
                    return None;
                }
                let next = index
                    .successor_of(entry)
                    .and_then(|next| totals.get(&next.title));
                Some(BookMetrics::new(entry, *own, next))
            })
            .collect();
        books.sort_by(|a, b| summary::by_roi_descending(&a.ratios.roi, &b.ratios.roi));

        debug!(books = books.len(), %window, "Computed conversions");
        metrics::counter!("analytics_reports_total", "kind" => "conversions").increment(1);
        Ok(books)
    }

    /// Clicks per sale for each interval between consecutive royalty statements.
    ///
    /// The first interval counts clicks dated in `[first, cur]`; every later
    /// one counts `[prev + 1 day, cur]`, so no day is counted twice. Clicks
    /// are divided by the units sold on `cur`. Intervals closing on a day
    /// with no units sold are skipped.
    #[tracing::instrument(skip(self))]
    pub async fn clicks_per_sale(&self, book_title: &str) -> Result<Vec<ClicksPerSale>, AppError> {
        let entry = self.resolver.catalog_entry(book_title).await?;

        let mut units_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for statement in self
            .resolver
            .royalties_for_title(&entry.title, DateFilter::All)
            .await?
        {
            *units_by_day.entry(statement.royalty_date).or_insert(0.0) +=
                statement.net_units_sold.unwrap_or(0.0);
        }

        let (Some(first), Some(last)) = (
            units_by_day.keys().next().copied(),
            units_by_day.keys().next_back().copied(),
        ) else {
            return Ok(Vec::new());
        };
        if first == last {
            return Ok(Vec::new());
        }

        let snapshots = self
            .resolver
            .snapshots_for_title(&entry.title, DateFilter::Between(first, last))
            .await?;

        let days: Vec<(NaiveDate, f64)> = units_by_day.into_iter().collect();
        let mut result = Vec::with_capacity(days.len() - 1);
        for (i, pair) in days.windows(2).enumerate() {
            let (prev, _) = pair[0];
            let (cur, units) = pair[1];
            if units == 0.0 {
                warn!(title = %entry.title, %cur, "No units sold, skipping interval");
                continue;
            }
            let start = if i == 0 { prev } else { next_day(prev) };
            let interval = DateFilter::Between(start, cur);
            let clicks: f64 = snapshots
                .iter()
                .filter(|s| interval.matches(s.date))
                .map(|s| s.clicks.unwrap_or(0.0))
                .sum();
            result.push(ClicksPerSale {
                value: clicks / units,
                date: cur,
            });
        }

        metrics::counter!("analytics_reports_total", "kind" => "clicks_per_sale").increment(1);
        Ok(result)
    }

    /// Campaigns not linked to any catalog title, by name.
    ///
    /// These take no part in per-book aggregation until linked.
    #[tracing::instrument(skip(self))]
    pub async fn unlinked_campaigns(&self) -> Result<Vec<Campaign>, AppError> {
        let mut campaigns: Vec<Campaign> = self
            .resolver
            .store()
            .campaigns
            .find_all()
            .await?
            .into_iter()
            .filter(|c| !c.is_linked())
            .collect();
        campaigns.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(campaigns = campaigns.len(), "Listed unlinked campaigns");
        metrics::counter!("analytics_reports_total", "kind" => "unlinked_campaigns").increment(1);
        Ok(campaigns)
    }

    /// Snapshots with both clicks and impressions for every linked campaign, by date.
    #[tracing::instrument(skip(self))]
    pub async fn ad_history(&self, book_title: &str) -> Result<Vec<DailyAdSnapshot>, AppError> {
        let entry = self.resolver.catalog_entry(book_title).await?;

        let mut history: Vec<DailyAdSnapshot> = self
            .resolver
            .snapshots_for_title(&entry.title, DateFilter::All)
            .await?
            .into_iter()
            .filter(|s| s.clicks.unwrap_or(0.0) > 0.0 && s.impressions.unwrap_or(0.0) > 0.0)
            .collect();
        history.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.campaign_name.cmp(&b.campaign_name))
        });

        metrics::counter!("analytics_reports_total", "kind" => "ad_history").increment(1);
        Ok(history)
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}
