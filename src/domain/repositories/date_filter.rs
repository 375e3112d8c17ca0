//! Date bounds applied to record-store queries.

use chrono::NaiveDate;

/// Restricts a query to records dated within a bound.
///
/// - [`DateFilter::All`] scans the entire history
/// - [`DateFilter::After`] keeps records dated strictly after the cutoff
/// - [`DateFilter::Between`] keeps records in a closed range, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    After(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl DateFilter {
    /// Builds a filter from an optional cutoff date.
    pub fn since(cutoff: Option<NaiveDate>) -> Self {
        cutoff.map_or(Self::All, Self::After)
    }

    /// Returns true if a record dated `date` passes the filter.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            Self::All => true,
            Self::After(cutoff) => date > cutoff,
            Self::Between(start, end) => start <= date && date <= end,
        }
    }

    /// Lower and upper bounds suitable for SQL `($n IS NULL OR ...)` predicates.
    ///
    /// The lower bound is exclusive for [`DateFilter::After`] and inclusive for
    /// [`DateFilter::Between`]; the flag in the tuple says which.
    pub fn bounds(&self) -> (Option<NaiveDate>, bool, Option<NaiveDate>) {
        match *self {
            Self::All => (None, false, None),
            Self::After(cutoff) => (Some(cutoff), true, None),
            Self::Between(start, end) => (Some(start), false, Some(end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, day).unwrap()
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(DateFilter::All.matches(d(1)));
        assert_eq!(DateFilter::since(None), DateFilter::All);
    }

    #[test]
    fn test_after_is_strict() {
        let filter = DateFilter::since(Some(d(11)));
        assert!(!filter.matches(d(11)));
        assert!(filter.matches(d(12)));
        assert!(!filter.matches(d(10)));
    }

    #[test]
    fn test_between_is_closed() {
        let filter = DateFilter::Between(d(11), d(13));
        assert!(filter.matches(d(11)));
        assert!(filter.matches(d(12)));
        assert!(filter.matches(d(13)));
        assert!(!filter.matches(d(14)));
        assert!(!filter.matches(d(10)));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(DateFilter::All.bounds(), (None, false, None));
        assert_eq!(DateFilter::After(d(1)).bounds(), (Some(d(1)), true, None));
        assert_eq!(
            DateFilter::Between(d(1), d(2)).bounds(),
            (Some(d(1)), false, Some(d(2)))
        );
    }
}
