//! Time-indexed values, zero-padded series and moving averages.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A single value attached to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DailyValue {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Total of a metric over a closed date range, stamped with the range end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Fixed-window average anchored on `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverage {
    pub date: NaiveDate,
    /// Samples that fell inside the window, oldest first.
    pub raw: Vec<DailyValue>,
    pub average: f64,
}

/// First day of a lookback window of `window_days` ending on `anchor`.
///
/// The window `[anchor − window_days, anchor]` is closed at both ends.
pub fn window_start(anchor: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    anchor.checked_sub_days(Days::new(u64::from(window_days)))
}

/// Averages `samples` over at least `window` slots.
///
/// Missing slots count as zero, so three samples in a seven-slot window are
/// divided by seven. When there are more samples than slots they are averaged
/// directly.
pub fn zero_padded_average(samples: &[f64], window: usize) -> f64 {
    let denominator = samples.len().max(window);
    if denominator == 0 {
        return 0.0;
    }
    samples.iter().sum::<f64>() / denominator as f64
}

/// Builds a moving average from per-day totals already restricted to the window.
pub fn moving_average(anchor: NaiveDate, daily: BTreeMap<NaiveDate, f64>, window_days: u32) -> MovingAverage {
    let raw: Vec<DailyValue> = daily
        .into_iter()
        .map(|(date, value)| DailyValue::new(date, value))
        .collect();
    let samples: Vec<f64> = raw.iter().map(|v| v.value).collect();

    MovingAverage {
        date: anchor,
        average: zero_padded_average(&samples, window_days as usize),
        raw,
    }
}

/// Expands sparse per-day totals into one value per day of `[start, end]`.
///
/// Days with no entry get zero. Entries outside the range are ignored.
pub fn fill_daily_series(
    daily: &BTreeMap<NaiveDate, f64>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyValue> {
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| DailyValue::new(date, daily.get(&date).copied().unwrap_or(0.0)))
        .collect()
}
