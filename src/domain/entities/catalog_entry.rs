//! Catalog entry entity representing a published book.

use serde::Serialize;

use crate::domain::title;

/// A published work. Its `title` is the join key for every other record kind.
///
/// `series_number`, when present, is strictly positive and unique within the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub short_code: String,
    pub series: Option<String>,
    pub series_number: Option<u32>,
    pub catalog_id: String,
    /// Page count of one complete read-through, used to turn page reads into units.
    pub full_read_page_count: f64,
}

impl CatalogEntry {
    /// Creates a standalone catalog entry with no series and no page-count constant.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            author: author.into(),
            short_code: String::new(),
            series: None,
            series_number: None,
            catalog_id: String::new(),
            full_read_page_count: 0.0,
        }
    }

    /// Places the entry in a series at the given position.
    ///
    /// A position of zero is not a valid series position and leaves the number unset.
    pub fn in_series(mut self, series: impl Into<String>, number: u32) -> Self {
        self.series = Some(series.into());
        self.series_number = (number > 0).then_some(number);
        self
    }

    /// Sets the full-read page count.
    pub fn with_full_read_page_count(mut self, pages: f64) -> Self {
        self.full_read_page_count = pages;
        self
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Canonical key used to match royalty and page-read statements.
    pub fn main_title(&self) -> &str {
        title::main_title(&self.title)
    }

    /// Title and subtitle as shown on the storefront.
    pub fn complete_title(&self) -> String {
        title::complete_title(&self.title, &self.subtitle)
    }

    /// Series name, if the entry belongs to a non-blank series.
    pub fn series_name(&self) -> Option<&str> {
        self.series.as_deref().filter(|s| !s.trim().is_empty())
    }
}
