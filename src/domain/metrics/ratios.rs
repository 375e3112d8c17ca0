//! Derived ratios with explicit zero-denominator outcomes.
//!
//! Each ratio has its own policy for an empty denominator. Click-through and
//! conversion report a sentinel, ROI reports "no ad spend", read-through
//! falls back to zero.

use std::fmt;

use serde::Serialize;

use super::reducers::AdPerformance;

/// Impressions needed per click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ClickThrough {
    NoClicks,
    ImpressionsPerClick(f64),
}

/// Clicks needed per unit sold (sales plus page-read equivalents).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Conversion {
    NoClicks,
    /// Clicks were bought but nothing sold.
    NoSales,
    ClicksPerSale(f64),
}

/// Return on ad spend as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Roi {
    /// Nothing was spent on ads; ranks above any numeric return.
    NoAdSpend,
    Percent(f64),
}

pub fn click_through(perf: AdPerformance) -> ClickThrough {
    if perf.clicks == 0.0 {
        ClickThrough::NoClicks
    } else {
        ClickThrough::ImpressionsPerClick(perf.impressions / perf.clicks)
    }
}

pub fn conversion(clicks: f64, units_sold_total: f64) -> Conversion {
    if clicks == 0.0 {
        Conversion::NoClicks
    } else if units_sold_total == 0.0 {
        Conversion::NoSales
    } else {
        Conversion::ClicksPerSale(clicks / units_sold_total)
    }
}

/// `(earnings − ad_spend) × 100 / ad_spend`, or [`Roi::NoAdSpend`] whenever
/// nothing was spent, regardless of earnings.
pub fn roi(earnings: f64, ad_spend: f64) -> Roi {
    if ad_spend == 0.0 {
        Roi::NoAdSpend
    } else {
        Roi::Percent((earnings - ad_spend) * 100.0 / ad_spend)
    }
}

/// Successor sales divided by this book's sales.
///
/// Zero when there is no successor or this book sold nothing.
pub fn read_through(units_sold_total: f64, successor_units_sold_total: Option<f64>) -> f64 {
    match successor_units_sold_total {
        Some(next) if units_sold_total != 0.0 => next / units_sold_total,
        _ => 0.0,
    }
}

impl Roi {
    /// Key for ordering best-first; the sentinel sorts above every percentage.
    pub fn rank(&self) -> f64 {
        match self {
            Roi::NoAdSpend => f64::INFINITY,
            Roi::Percent(p) => *p,
        }
    }
}

impl fmt::Display for ClickThrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClicks => write!(f, "No clicks"),
            Self::ImpressionsPerClick(v) => write!(f, "1 click every {v:.1} impressions"),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClicks => write!(f, "No clicks"),
            Self::NoSales => write!(f, "No sales"),
            Self::ClicksPerSale(v) => write!(f, "1:{v:.1}"),
        }
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAdSpend => write!(f, "No ad spend"),
            Self::Percent(v) => write!(f, "{v:.1}%"),
        }
    }
}
