//! Named lookback windows for report listings.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// How far back a report looks.
///
/// Parsed from `all` or `<N>days`, e.g. `90days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DeserializeFromStr, SerializeDisplay)]
pub enum LookbackWindow {
    #[default]
    Lifetime,
    Days(u32),
}

impl LookbackWindow {
    /// Windows offered by the reports, shortest last.
    pub const PRESETS: [LookbackWindow; 5] = [
        LookbackWindow::Lifetime,
        LookbackWindow::Days(90),
        LookbackWindow::Days(45),
        LookbackWindow::Days(30),
        LookbackWindow::Days(15),
    ];

    /// Cutoff date relative to `today`; records strictly after it are included.
    ///
    /// `None` for the lifetime window.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match *self {
            Self::Lifetime => None,
            Self::Days(days) => Some(
                today
                    .checked_sub_days(Days::new(u64::from(days)))
                    .unwrap_or(NaiveDate::MIN),
            ),
        }
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lifetime => f.write_str("all"),
            Self::Days(days) => write!(f, "{days}days"),
        }
    }
}

impl FromStr for LookbackWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s == "all" {
            return Ok(Self::Lifetime);
        }
        s.strip_suffix("days")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(Self::Days)
            .ok_or_else(|| format!("invalid window '{s}', expected 'all' or '<N>days'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<LookbackWindow>(), Ok(LookbackWindow::Lifetime));
        assert_eq!("90days".parse::<LookbackWindow>(), Ok(LookbackWindow::Days(90)));
        assert_eq!(" 15DAYS ".parse::<LookbackWindow>(), Ok(LookbackWindow::Days(15)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0days".parse::<LookbackWindow>().is_err());
        assert!("days".parse::<LookbackWindow>().is_err());
        assert!("90".parse::<LookbackWindow>().is_err());
        assert!("-5days".parse::<LookbackWindow>().is_err());
    }

    #[test]
    fn test_display_round_trips_presets() {
        for window in LookbackWindow::PRESETS {
            assert_eq!(window.to_string().parse::<LookbackWindow>(), Ok(window));
        }
    }

    #[test]
    fn test_cutoff() {
        let today = NaiveDate::from_ymd_opt(2018, 8, 31).unwrap();
        assert_eq!(LookbackWindow::Lifetime.cutoff(today), None);
        assert_eq!(
            LookbackWindow::Days(30).cutoff(today),
            NaiveDate::from_ymd_opt(2018, 8, 1)
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&LookbackWindow::Days(45)).unwrap();
        assert_eq!(json, "\"45days\"");
        let back: LookbackWindow = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, LookbackWindow::Lifetime);
    }
}
