//! PostgreSQL implementation of the ad snapshot repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DailyAdSnapshot;
use crate::domain::repositories::{AdSnapshotRepository, DateFilter};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SnapshotRow {
    campaign_name: String,
    snapshot_date: NaiveDate,
    impressions: Option<f64>,
    clicks: Option<f64>,
    average_cpc: Option<f64>,
}

impl From<SnapshotRow> for DailyAdSnapshot {
    fn from(row: SnapshotRow) -> Self {
        Self {
            campaign_name: row.campaign_name,
            date: row.snapshot_date,
            impressions: row.impressions,
            clicks: row.clicks,
            average_cpc: row.average_cpc,
        }
    }
}

/// PostgreSQL repository for daily ad snapshots.
pub struct PgAdSnapshotRepository {
    pool: Arc<PgPool>,
}

impl PgAdSnapshotRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdSnapshotRepository for PgAdSnapshotRepository {
    async fn find_by_campaign(
        &self,
        campaign_name: &str,
        filter: DateFilter,
    ) -> Result<Vec<DailyAdSnapshot>, AppError> {
        let (lower, lower_exclusive, upper) = filter.bounds();

        let rows = sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT campaign_name, snapshot_date, impressions, clicks, average_cpc
            FROM ad_snapshots
            WHERE campaign_name = $1
              AND ($2::date IS NULL OR snapshot_date > $2 OR (NOT $3 AND snapshot_date = $2))
              AND ($4::date IS NULL OR snapshot_date <= $4)
            ORDER BY snapshot_date
            "#,
        )
        .bind(campaign_name)
        .bind(lower)
        .bind(lower_exclusive)
        .bind(upper)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(DailyAdSnapshot::from).collect())
    }
}
