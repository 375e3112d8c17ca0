//! Advertising campaign entity.

use chrono::NaiveDate;
use serde::Serialize;

/// An advertising campaign, optionally linked to a catalog title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub name: String,
    pub campaign_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub budget: f64,
    pub book_title: Option<String>,
    pub series: Option<String>,
}

impl Campaign {
    /// Creates an unlinked campaign.
    pub fn new(name: impl Into<String>, campaign_type: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            campaign_type: campaign_type.into(),
            start_date,
            end_date: None,
            budget: 0.0,
            book_title: None,
            series: None,
        }
    }

    /// Links the campaign to a catalog title.
    pub fn linked_to(mut self, book_title: impl Into<String>) -> Self {
        self.book_title = Some(book_title.into());
        self
    }

    /// A campaign takes part in per-book aggregation only when linked to a non-empty title.
    pub fn is_linked(&self) -> bool {
        self.book_title
            .as_deref()
            .is_some_and(|title| !title.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, 1).unwrap()
    }

    #[test]
    fn test_unlinked_campaign() {
        let campaign = Campaign::new("Summer Push", "Sponsored Products", date());
        assert!(!campaign.is_linked());
    }

    #[test]
    fn test_empty_title_is_not_linked() {
        let campaign = Campaign::new("Summer Push", "Sponsored Products", date()).linked_to("");
        assert!(!campaign.is_linked());
    }

    #[test]
    fn test_linked_campaign() {
        let campaign =
            Campaign::new("Summer Push", "Sponsored Products", date()).linked_to("Test Book");
        assert!(campaign.is_linked());
        assert_eq!(campaign.book_title.as_deref(), Some("Test Book"));
    }
}
