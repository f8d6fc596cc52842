//! Date formats used by the picker.
//!
//! Three renderings of the same date coexist:
//! - ISO `YYYY-MM-DD` for the persisted filter,
//! - compact `YYYYMMDD` for URL query parameters,
//! - medium display format (`Jan 5, 2024`) for the trigger input.

use chrono::NaiveDate;

use super::range::DateRange;

pub const ISO_FORMAT: &str = "%Y-%m-%d";
pub const COMPACT_FORMAT: &str = "%Y%m%d";
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Format date as `YYYY-MM-DD`.
/// Example: 2024-03-05 -> "2024-03-05"
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Format date as `YYYYMMDD`.
/// Example: 2024-03-05 -> "20240305"
pub fn format_compact(date: NaiveDate) -> String {
    date.format(COMPACT_FORMAT).to_string()
}

/// Format date in medium display format.
/// Example: 2024-01-05 -> "Jan 5, 2024"
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Text shown in the picker trigger: `"{start} - {end}"`.
pub fn format_range_display(range: &DateRange) -> String {
    format!("{} - {}", format_display(range.start), format_display(range.end))
}

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

pub fn parse_compact(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, COMPACT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_machine_formats() {
        assert_eq!(format_iso(d(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_compact(d(2024, 3, 5)), "20240305");
        assert_eq!(parse_iso("2024-03-05"), Some(d(2024, 3, 5)));
        assert_eq!(parse_compact("20240305"), Some(d(2024, 3, 5)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(format_display(d(2024, 1, 5)), "Jan 5, 2024");
        assert_eq!(format_display(d(2023, 12, 31)), "Dec 31, 2023");
        assert_eq!(
            format_range_display(&DateRange::new(d(2024, 2, 15), d(2024, 3, 15))),
            "Feb 15, 2024 - Mar 15, 2024"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_iso("15.03.2024"), None);
        assert_eq!(parse_iso("2024-02-30"), None);
        assert_eq!(parse_compact("2024-03-05"), None);
        assert_eq!(parse_compact("2024035"), None);
        assert_eq!(parse_compact("20241301"), None);
    }
}
