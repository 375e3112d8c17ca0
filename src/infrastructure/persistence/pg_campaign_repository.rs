//! PostgreSQL implementation of the campaign repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Campaign;
use crate::domain::repositories::CampaignRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CampaignRow {
    name: String,
    campaign_type: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    budget: f64,
    book_title: Option<String>,
    series: Option<String>,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Self {
            name: row.name,
            campaign_type: row.campaign_type,
            start_date: row.start_date,
            end_date: row.end_date,
            budget: row.budget,
            book_title: row.book_title,
            series: row.series,
        }
    }
}

/// PostgreSQL repository for advertising campaigns.
pub struct PgCampaignRepository {
    pool: Arc<PgPool>,
}

impl PgCampaignRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    async fn find_all(&self) -> Result<Vec<Campaign>, AppError> {
        let rows = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT name, campaign_type, start_date, end_date, budget, book_title, series
            FROM campaigns
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    async fn find_linked_to_title(&self, book_title: &str) -> Result<Vec<Campaign>, AppError> {
        if book_title.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT name, campaign_type, start_date, end_date, budget, book_title, series
            FROM campaigns
            WHERE book_title = $1
            ORDER BY name
            "#,
        )
        .bind(book_title)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }
}
