//! Royalty statement entity.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::title;

/// One day's sales and royalty record for one title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoyaltyStatement {
    /// Title as printed on the statement, possibly including a subtitle.
    pub title: String,
    /// Canonical key derived from `title`.
    pub main_title: String,
    pub royalty_date: NaiveDate,
    pub net_units_sold: Option<f64>,
    pub royalty: Option<f64>,
    pub currency: String,
}

impl RoyaltyStatement {
    /// Creates a statement, deriving the canonical main title.
    pub fn new(
        title: impl Into<String>,
        royalty_date: NaiveDate,
        net_units_sold: Option<f64>,
        royalty: Option<f64>,
    ) -> Self {
        let title = title.into();
        Self {
            main_title: title::main_title(&title).to_string(),
            title,
            royalty_date,
            net_units_sold,
            royalty,
            currency: "USD".to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_title_is_derived() {
        let statement = RoyaltyStatement::new(
            "Test Book: The Sequel",
            NaiveDate::from_ymd_opt(2018, 8, 11).unwrap(),
            Some(1.0),
            Some(1.99),
        );

        assert_eq!(statement.title, "Test Book: The Sequel");
        assert_eq!(statement.main_title, "Test Book");
        assert_eq!(statement.currency, "USD");
    }
}
