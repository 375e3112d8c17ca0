//! Pure metric computation.
//!
//! Nothing in this module touches the record store. Services gather records
//! and hand them to these functions, which fold them into totals, ratios and
//! time series.
//!
//! - [`reducers`] - null-safe sums over one record kind
//! - [`ratios`] - derived ratios and their zero-denominator outcomes
//! - [`window`] - range totals, zero-padded daily series and moving averages
//! - [`summary`] - per-book and per-series result types
//! - [`series_index`] - next-book lookup for read-through

pub mod lookback;
pub mod ratios;
pub mod records;
pub mod reducers;
pub mod series_index;
pub mod summary;
pub mod window;

pub use lookback::LookbackWindow;
pub use ratios::{ClickThrough, Conversion, Roi};
pub use records::{MetricKind, TitleRecords};
pub use reducers::{AdPerformance, PageReadRate};
pub use series_index::SeriesIndex;
pub use summary::{BookMetrics, DerivedRatios, MetricTotals, SeriesMetrics};
pub use window::{DailyValue, MovingAverage, RangeTotal};
