//! PostgreSQL implementation of the page-read statement repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::PageReadStatement;
use crate::domain::repositories::{DateFilter, PageReadRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PageReadRow {
    title: String,
    main_title: String,
    order_date: NaiveDate,
    pages_read: Option<f64>,
}

impl From<PageReadRow> for PageReadStatement {
    fn from(row: PageReadRow) -> Self {
        Self {
            title: row.title,
            main_title: row.main_title,
            order_date: row.order_date,
            pages_read: row.pages_read,
        }
    }
}

/// PostgreSQL repository for page-read statements.
pub struct PgPageReadRepository {
    pool: Arc<PgPool>,
}

impl PgPageReadRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageReadRepository for PgPageReadRepository {
    async fn find_by_title(
        &self,
        main_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<PageReadStatement>, AppError> {
        let (lower, lower_exclusive, upper) = filter.bounds();

        let rows = sqlx::query_as::<_, PageReadRow>(
            r#"
            SELECT title, main_title, order_date, pages_read
            FROM page_read_statements
            WHERE main_title = $1
              AND ($2::date IS NULL OR order_date > $2 OR (NOT $3 AND order_date = $2))
              AND ($4::date IS NULL OR order_date <= $4)
            ORDER BY order_date
            "#,
        )
        .bind(main_title)
        .bind(lower)
        .bind(lower_exclusive)
        .bind(upper)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PageReadStatement::from).collect())
    }
}
