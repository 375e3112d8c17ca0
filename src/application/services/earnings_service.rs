//! Range totals, daily series, moving averages and ROI over date ranges.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::join_resolver::{JoinResolver, Sources};
use crate::domain::metrics::{
    DailyValue, MetricKind, MovingAverage, PageReadRate, RangeTotal, Roi, ratios, reducers, window,
};
use crate::domain::repositories::DateFilter;
use crate::error::AppError;

/// Longest range a daily series may cover.
pub const MAX_DAILY_SERIES_DAYS: i64 = 3660;

/// Return on ad spend over a closed range, stamped with the range end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiReport {
    pub date: NaiveDate,
    pub roi: Roi,
}

/// Service for time-bounded earnings and ad metrics.
pub struct EarningsService {
    resolver: JoinResolver,
    rate: PageReadRate,
}

impl EarningsService {
    pub fn new(resolver: JoinResolver, rate: PageReadRate) -> Self {
        Self { resolver, rate }
    }

    /// Total of `kind` for one book over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `start` is after `end`.
    /// Returns [`AppError::NotFound`] if the title is not in the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn range_metric(
        &self,
        book_title: &str,
        kind: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeTotal, AppError> {
        check_range(start, end)?;
        let entry = self.resolver.catalog_entry(book_title).await?;

        let records = self
            .resolver
            .records(&entry.title, DateFilter::Between(start, end), Sources::for_kind(kind))
            .await?;
        let total = records.total(kind, self.rate);

        debug!(title = %entry.title, %kind, total, "Range total");
        metrics::counter!("analytics_reports_total", "kind" => "range_metric").increment(1);
        Ok(RangeTotal { date: end, total })
    }

    /// Sum of the per-book range totals for every book in `series`.
    ///
    /// A series with no books totals zero.
    #[tracing::instrument(skip(self))]
    pub async fn series_range_metric(
        &self,
        series: &str,
        kind: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeTotal, AppError> {
        check_range(start, end)?;
        let books = self.resolver.books_in_series(series).await?;

        let total = self
            .resolver
            .range_total_for_books(&books, kind, DateFilter::Between(start, end), self.rate)
            .await?;

        metrics::counter!("analytics_reports_total", "kind" => "series_range_metric").increment(1);
        Ok(RangeTotal { date: end, total })
    }

    /// One value of `kind` per day of `[start, end]`, days without records as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the range is inverted or longer than
    /// [`MAX_DAILY_SERIES_DAYS`].
    #[tracing::instrument(skip(self))]
    pub async fn daily_series(
        &self,
        book_title: &str,
        kind: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyValue>, AppError> {
        check_range(start, end)?;
        let days = (end - start).num_days() + 1;
        if days > MAX_DAILY_SERIES_DAYS {
            return Err(AppError::bad_request(
                "Date range too long",
                json!({ "days": days, "max_days": MAX_DAILY_SERIES_DAYS }),
            ));
        }
        let entry = self.resolver.catalog_entry(book_title).await?;

        let records = self
            .resolver
            .records(&entry.title, DateFilter::Between(start, end), Sources::for_kind(kind))
            .await?;
        let daily = records.daily_totals(kind, self.rate);

        metrics::counter!("analytics_reports_total", "kind" => "daily_series").increment(1);
        Ok(window::fill_daily_series(&daily, start, end))
    }

    /// Average of per-day totals over `[anchor − window_days, anchor]`.
    ///
    /// Fewer samples than `window_days` are padded with zeros. Page-read revenue
    /// is derived from the pages-read average and carries no raw samples.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `window_days` is zero.
    #[tracing::instrument(skip(self))]
    pub async fn moving_average(
        &self,
        book_title: &str,
        kind: MetricKind,
        anchor: NaiveDate,
        window_days: u32,
    ) -> Result<MovingAverage, AppError> {
        if window_days == 0 {
            return Err(AppError::bad_request(
                "Window must be at least one day",
                json!({ "window": window_days }),
            ));
        }
        let entry = self.resolver.catalog_entry(book_title).await?;

        let source_kind = match kind {
            MetricKind::PageReadRevenue => MetricKind::PagesRead,
            other => other,
        };
        let start = window::window_start(anchor, window_days).unwrap_or(NaiveDate::MIN);
        let records = self
            .resolver
            .records(
                &entry.title,
                DateFilter::Between(start, anchor),
                Sources::for_kind(source_kind),
            )
            .await?;
        let average = window::moving_average(
            anchor,
            records.daily_totals(source_kind, self.rate),
            window_days,
        );

        metrics::counter!("analytics_reports_total", "kind" => "moving_average").increment(1);
        if kind == MetricKind::PageReadRevenue {
            return Ok(MovingAverage {
                date: anchor,
                raw: Vec::new(),
                average: self.rate.to_dollars(average.average),
            });
        }
        Ok(average)
    }

    /// ROI for one book over `[start, end]`.
    #[tracing::instrument(skip(self))]
    pub async fn roi(
        &self,
        book_title: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RoiReport, AppError> {
        check_range(start, end)?;
        let entry = self.resolver.catalog_entry(book_title).await?;

        let records = self
            .resolver
            .records(&entry.title, DateFilter::Between(start, end), Sources::ALL)
            .await?;
        let earnings = reducers::total_earnings(
            reducers::royalties(&records.royalties),
            reducers::pages_read(&records.page_reads),
            self.rate,
        );
        let spend = reducers::ad_spend(&records.snapshots);

        metrics::counter!("analytics_reports_total", "kind" => "roi").increment(1);
        Ok(RoiReport {
            date: end,
            roi: ratios::roi(earnings, spend),
        })
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::bad_request(
            "Start date is after end date",
            json!({ "start": start, "end": end }),
        ));
    }
    Ok(())
}
