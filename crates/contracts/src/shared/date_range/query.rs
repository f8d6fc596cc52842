use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::{format_compact, parse_compact};
use super::range::DateRange;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Page location unavailable")]
    Unavailable,

    #[error("Query string error: {0}")]
    Encode(String),
}

/// Committed range as written to the page URL (`YYYYMMDD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    pub start_date: String,
    pub end_date: String,
}

impl RangeQuery {
    pub fn from_range(range: &DateRange) -> Self {
        Self {
            start_date: format_compact(range.start),
            end_date: format_compact(range.end),
        }
    }

    /// Range back from the query values; `None` when either is malformed.
    pub fn parse_range(&self) -> Option<DateRange> {
        Some(DateRange::new(
            parse_compact(&self.start_date)?,
            parse_compact(&self.end_date)?,
        ))
    }
}

/// Host page URL receiving the committed range.
pub trait QueryParamSink {
    /// Set `start_date`/`end_date`, keeping other parameters, without navigating.
    fn replace_range(&mut self, query: &RangeQuery) -> Result<(), QueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_compact_values() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        let query = RangeQuery::from_range(&range);
        assert_eq!(query.start_date, "20240215");
        assert_eq!(query.end_date, "20240305");
        assert_eq!(query.parse_range(), Some(range));
    }

    #[test]
    fn test_malformed_values() {
        let query = RangeQuery {
            start_date: "2024-02-15".to_string(),
            end_date: "20240305".to_string(),
        };
        assert_eq!(query.parse_range(), None);
    }
}
