//! Resolution of titles to the records that belong to them.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::{StreamExt, TryStreamExt, stream};
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{CatalogEntry, DailyAdSnapshot, PageReadStatement, RoyaltyStatement};
use crate::domain::metrics::{MetricKind, MetricTotals, PageReadRate, TitleRecords};
use crate::domain::repositories::{DateFilter, RecordStore};
use crate::domain::title;
use crate::error::AppError;

/// Which record collections a query needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sources {
    pub snapshots: bool,
    pub royalties: bool,
    pub page_reads: bool,
}

impl Sources {
    pub const ALL: Self = Self {
        snapshots: true,
        royalties: true,
        page_reads: true,
    };

    /// Only the collections `kind` is computed from.
    pub fn for_kind(kind: MetricKind) -> Self {
        Self {
            snapshots: kind.needs_snapshots(),
            royalties: kind.needs_royalties(),
            page_reads: kind.needs_page_reads(),
        }
    }
}

/// Joins catalog titles to campaigns, snapshots and statements.
///
/// An empty join is never an error: a title with no linked campaigns simply
/// yields no snapshots. Store faults propagate unchanged.
#[derive(Clone)]
pub struct JoinResolver {
    store: RecordStore,
    fanout_limit: usize,
}

impl JoinResolver {
    /// Creates a resolver. `fanout_limit` bounds concurrent per-campaign and
    /// per-book work within one request and is clamped to at least 1.
    pub fn new(store: RecordStore, fanout_limit: usize) -> Self {
        Self {
            store,
            fanout_limit: fanout_limit.max(1),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Looks up a catalog entry by exact title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this title.
    pub async fn catalog_entry(&self, book_title: &str) -> Result<CatalogEntry, AppError> {
        self.store
            .catalog
            .find_by_title(book_title)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "title": book_title })))
    }

    /// Every catalog entry whose series field equals `series`.
    pub async fn books_in_series(&self, series: &str) -> Result<Vec<CatalogEntry>, AppError> {
        self.store.catalog.find_by_series(series).await
    }

    /// Names of the campaigns linked to `book_title`.
    pub async fn linked_campaign_names(&self, book_title: &str) -> Result<Vec<String>, AppError> {
        let campaigns = self.store.campaigns.find_linked_to_title(book_title).await?;
        Ok(campaigns
            .into_iter()
            .filter(|c| c.is_linked())
            .map(|c| c.name)
            .collect())
    }

    /// Snapshots of every campaign linked to `book_title`, grouped by campaign.
    ///
    /// Batches are concatenated in campaign order regardless of completion order.
    pub async fn snapshots_for_title(
        &self,
        book_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<DailyAdSnapshot>, AppError> {
        let names = self.linked_campaign_names(book_title).await?;
        if names.is_empty() {
            debug!(title = book_title, "No campaigns linked");
            return Ok(Vec::new());
        }

        let repo = Arc::clone(&self.store.snapshots);
        let batches: Vec<Vec<DailyAdSnapshot>> = stream::iter(names)
            .map(move |name| {
                let repo = Arc::clone(&repo);
                async move { repo.find_by_campaign(&name, filter).await }
            })
            .buffered(self.fanout_limit)
            .try_collect()
            .await?;

        Ok(batches.into_iter().flatten().collect())
    }

    /// Royalty statements whose canonical title matches the catalog title.
    pub async fn royalties_for_title(
        &self,
        book_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<RoyaltyStatement>, AppError> {
        self.store
            .royalties
            .find_by_title(title::main_title(book_title), filter)
            .await
    }

    /// Page-read statements whose canonical title matches the catalog title.
    pub async fn page_reads_for_title(
        &self,
        book_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<PageReadStatement>, AppError> {
        self.store
            .page_reads
            .find_by_title(title::main_title(book_title), filter)
            .await
    }

    /// Gathers the requested collections for one title concurrently.
    pub async fn records(
        &self,
        book_title: &str,
        filter: DateFilter,
        sources: Sources,
    ) -> Result<TitleRecords, AppError> {
        let snapshots = async {
            if sources.snapshots {
                self.snapshots_for_title(book_title, filter).await
            } else {
                Ok(Vec::new())
            }
        };
        let royalties = async {
            if sources.royalties {
                self.royalties_for_title(book_title, filter).await
            } else {
                Ok(Vec::new())
            }
        };
        let page_reads = async {
            if sources.page_reads {
                self.page_reads_for_title(book_title, filter).await
            } else {
                Ok(Vec::new())
            }
        };

        let (snapshots, royalties, page_reads) = tokio::try_join!(snapshots, royalties, page_reads)?;

        Ok(TitleRecords {
            snapshots,
            royalties,
            page_reads,
        })
    }

    /// Runs the full reduction for one book.
    pub async fn book_totals(
        &self,
        entry: &CatalogEntry,
        filter: DateFilter,
        rate: PageReadRate,
    ) -> Result<MetricTotals, AppError> {
        let records = self.records(&entry.title, filter, Sources::ALL).await?;
        let totals = MetricTotals::from_records(&records, entry.full_read_page_count, rate);

        debug!(
            title = %entry.title,
            impressions = totals.impressions,
            clicks = totals.clicks,
            units_sold = totals.units_sold,
            pages_read = totals.pages_read,
            ad_spend = totals.ad_spend,
            earnings = totals.earnings,
            "Reduced book totals"
        );

        Ok(totals)
    }

    /// Totals for many books, keyed by title.
    ///
    /// At most `fanout_limit` books are reduced at once. Every branch must
    /// finish before this returns; the first store fault aborts the rest.
    pub async fn totals_for_books(
        &self,
        entries: &[CatalogEntry],
        filter: DateFilter,
        rate: PageReadRate,
    ) -> Result<HashMap<String, MetricTotals>, AppError> {
        let resolver = self.clone();
        stream::iter(entries.to_vec())
            .map(move |entry| {
                let resolver = resolver.clone();
                async move {
                    let totals = resolver.book_totals(&entry, filter, rate).await?;
                    Ok::<_, AppError>((entry.title, totals))
                }
            })
            .buffer_unordered(self.fanout_limit)
            .try_collect()
            .await
    }

    /// Sum of one metric over a date range across many books.
    pub async fn range_total_for_books(
        &self,
        entries: &[CatalogEntry],
        kind: MetricKind,
        filter: DateFilter,
        rate: PageReadRate,
    ) -> Result<f64, AppError> {
        let resolver = self.clone();
        let totals: Vec<f64> = stream::iter(entries.to_vec())
            .map(move |entry| {
                let resolver = resolver.clone();
                async move {
                    let records = resolver
                        .records(&entry.title, filter, Sources::for_kind(kind))
                        .await?;
                    Ok::<_, AppError>(records.total(kind, rate))
                }
            })
            .buffered(self.fanout_limit)
            .try_collect()
            .await?;

        Ok(totals.into_iter().sum())
    }
}
