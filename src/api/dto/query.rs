//! Query string parameters.
//!
//! Dates are ISO `YYYY-MM-DD`. Metric kinds accept `snake_case` or
//! `kebab-case` names (`units_sold`, `page-read-revenue`).

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::metrics::{LookbackWindow, MetricKind};

/// Moving-average window used when the caller does not give one.
pub const DEFAULT_MOVING_AVERAGE_DAYS: u32 = 7;

/// Optional lower bound on record dates (exclusive).
#[derive(Debug, Default, Deserialize)]
pub struct SinceParams {
    #[serde(default)]
    pub since: Option<NaiveDate>,
}

/// Lookback window for listings (`all`, `90days`, ...). Defaults to lifetime.
#[derive(Debug, Default, Deserialize)]
pub struct WindowParams {
    #[serde(default)]
    pub window: LookbackWindow,
}

/// Closed date range `[start, end]`.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One metric over a closed date range.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct MetricRangeParams {
    #[serde_as(as = "DisplayFromStr")]
    pub metric: MetricKind,

    #[serde(flatten)]
    pub range: DateRangeParams,
}

/// Moving average of one metric ending on `anchor`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct MovingAverageParams {
    #[serde_as(as = "DisplayFromStr")]
    pub metric: MetricKind,

    pub anchor: NaiveDate,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 3650, message = "Window must be between 1 and 3650 days"))]
    pub window: Option<u32>,
}

impl MovingAverageParams {
    pub fn window_days(&self) -> u32 {
        self.window.unwrap_or(DEFAULT_MOVING_AVERAGE_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_window_defaults_to_lifetime() {
        let p: WindowParams = serde_json::from_str("{}").unwrap();
        assert_eq!(p.window, LookbackWindow::Lifetime);

        let p: WindowParams = serde_json::from_str(r#"{"window": "45days"}"#).unwrap();
        assert_eq!(p.window, LookbackWindow::Days(45));
    }

    #[test]
    fn test_invalid_window_is_error() {
        assert!(serde_json::from_str::<WindowParams>(r#"{"window": "forever"}"#).is_err());
    }

    #[test]
    fn test_metric_range_accepts_kebab_case() {
        let json = r#"{"metric": "page-read-revenue", "start": "2018-08-01", "end": "2018-08-31"}"#;
        let p: MetricRangeParams = serde_json::from_str(json).unwrap();

        assert_eq!(p.metric, MetricKind::PageReadRevenue);
        assert_eq!(p.range.start, d(2018, 8, 1));
        assert_eq!(p.range.end, d(2018, 8, 31));
    }

    #[test]
    fn test_unknown_metric_is_error() {
        let json = r#"{"metric": "likes", "start": "2018-08-01", "end": "2018-08-31"}"#;
        assert!(serde_json::from_str::<MetricRangeParams>(json).is_err());
    }

    #[test]
    fn test_moving_average_window() {
        let json = r#"{"metric": "pages_read", "anchor": "2018-08-31"}"#;
        let p: MovingAverageParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.window_days(), DEFAULT_MOVING_AVERAGE_DAYS);
        assert!(p.validate().is_ok());

        let json = r#"{"metric": "pages_read", "anchor": "2018-08-31", "window": "0"}"#;
        let p: MovingAverageParams = serde_json::from_str(json).unwrap();
        assert!(p.validate().is_err());

        let json = r#"{"metric": "pages_read", "anchor": "2018-08-31", "window": "3651"}"#;
        let p: MovingAverageParams = serde_json::from_str(json).unwrap();
        assert!(p.validate().is_err());
    }
}
