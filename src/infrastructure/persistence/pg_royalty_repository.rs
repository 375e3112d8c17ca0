//! PostgreSQL implementation of the royalty statement repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RoyaltyStatement;
use crate::domain::repositories::{DateFilter, RoyaltyRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RoyaltyRow {
    title: String,
    main_title: String,
    royalty_date: NaiveDate,
    net_units_sold: Option<f64>,
    royalty: Option<f64>,
    currency: String,
}

impl From<RoyaltyRow> for RoyaltyStatement {
    fn from(row: RoyaltyRow) -> Self {
        Self {
            title: row.title,
            main_title: row.main_title,
            royalty_date: row.royalty_date,
            net_units_sold: row.net_units_sold,
            royalty: row.royalty,
            currency: row.currency,
        }
    }
}

/// PostgreSQL repository for royalty statements.
///
/// Queries by the canonical `main_title` column written at load time.
pub struct PgRoyaltyRepository {
    pool: Arc<PgPool>,
}

impl PgRoyaltyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoyaltyRepository for PgRoyaltyRepository {
    async fn find_by_title(
        &self,
        main_title: &str,
        filter: DateFilter,
    ) -> Result<Vec<RoyaltyStatement>, AppError> {
        let (lower, lower_exclusive, upper) = filter.bounds();

        let rows = sqlx::query_as::<_, RoyaltyRow>(
            r#"
            SELECT title, main_title, royalty_date, net_units_sold, royalty, currency
            FROM royalty_statements
            WHERE main_title = $1
              AND ($2::date IS NULL OR royalty_date > $2 OR (NOT $3 AND royalty_date = $2))
              AND ($4::date IS NULL OR royalty_date <= $4)
            ORDER BY royalty_date
            "#,
        )
        .bind(main_title)
        .bind(lower)
        .bind(lower_exclusive)
        .bind(upper)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RoyaltyStatement::from).collect())
    }
}
