use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range.
///
/// `start <= end` is the expected state, but the type does not enforce it:
/// the picker controller lets a selection become inverted for the duration of
/// a single handler and repairs it before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// True when `date` lies strictly between the bounds (both excluded).
    pub fn contains_strictly(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }

    /// True when `date` lies within the bounds (both included).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both ends. Zero for an inverted range.
    pub fn days(&self) -> i64 {
        if self.is_ordered() {
            (self.end - self.start).num_days() + 1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_strict_containment_excludes_bounds() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 5));
        assert!(!range.contains_strictly(d(2024, 3, 1)));
        assert!(range.contains_strictly(d(2024, 3, 2)));
        assert!(range.contains_strictly(d(2024, 3, 4)));
        assert!(!range.contains_strictly(d(2024, 3, 5)));
        assert!(range.contains(d(2024, 3, 5)));
    }

    #[test]
    fn test_days_counts_both_ends() {
        assert_eq!(DateRange::single(d(2024, 1, 1)).days(), 1);
        assert_eq!(DateRange::new(d(2024, 2, 1), d(2024, 2, 29)).days(), 29);
        assert_eq!(DateRange::new(d(2024, 2, 2), d(2024, 2, 1)).days(), 0);
    }
}
