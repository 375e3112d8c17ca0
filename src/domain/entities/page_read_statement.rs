//! Subscription page-read statement entity.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::title;

/// One day's subscription page-read count for one title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReadStatement {
    pub title: String,
    pub main_title: String,
    pub order_date: NaiveDate,
    pub pages_read: Option<f64>,
}

impl PageReadStatement {
    /// Creates a statement, deriving the canonical main title.
    pub fn new(title: impl Into<String>, order_date: NaiveDate, pages_read: Option<f64>) -> Self {
        let title = title.into();
        Self {
            main_title: title::main_title(&title).to_string(),
            title,
            order_date,
            pages_read,
        }
    }
}
