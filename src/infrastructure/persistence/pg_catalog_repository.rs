//! PostgreSQL implementation of the catalog repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CatalogEntry;
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

const CATALOG_COLUMNS: &str = "title, subtitle, author, short_code, series, series_number, \
                               catalog_id, full_read_page_count";

#[derive(sqlx::FromRow)]
struct CatalogRow {
    title: String,
    subtitle: String,
    author: String,
    short_code: String,
    series: Option<String>,
    series_number: Option<i32>,
    catalog_id: String,
    full_read_page_count: f64,
}

impl From<CatalogRow> for CatalogEntry {
    fn from(row: CatalogRow) -> Self {
        Self {
            title: row.title,
            subtitle: row.subtitle,
            author: row.author,
            short_code: row.short_code,
            series: row.series,
            series_number: row
                .series_number
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0),
            catalog_id: row.catalog_id,
            full_read_page_count: row.full_read_page_count,
        }
    }
}

/// PostgreSQL repository for the book catalog.
pub struct PgCatalogRepository {
    pool: Arc<PgPool>,
}

impl PgCatalogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn find_all(&self) -> Result<Vec<CatalogEntry>, AppError> {
        let sql = format!("SELECT {CATALOG_COLUMNS} FROM catalog_entries ORDER BY title");
        let rows = sqlx::query_as::<_, CatalogRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(CatalogEntry::from).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<CatalogEntry>, AppError> {
        let sql = format!("SELECT {CATALOG_COLUMNS} FROM catalog_entries WHERE title = $1");
        let row = sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(title)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(CatalogEntry::from))
    }

    async fn find_by_series(&self, series: &str) -> Result<Vec<CatalogEntry>, AppError> {
        let sql = format!(
            "SELECT {CATALOG_COLUMNS} FROM catalog_entries WHERE series = $1 \
             ORDER BY series_number NULLS LAST, title"
        );
        let rows = sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(series)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(CatalogEntry::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_entries")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
