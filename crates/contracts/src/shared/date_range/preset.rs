use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::range::DateRange;

/// Named shortcuts offered next to the calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKey {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    Last3Months,
    FirstHalf,
    SecondHalf,
    Q1,
    Q2,
    Q3,
    Q4,
    Custom,
}

impl PresetKey {
    /// Key as stored in the persisted filter (`presetName`).
    pub fn code(&self) -> &'static str {
        match self {
            PresetKey::Today => "today",
            PresetKey::Yesterday => "yesterday",
            PresetKey::ThisWeek => "this_week",
            PresetKey::LastWeek => "last_week",
            PresetKey::ThisMonth => "this_month",
            PresetKey::LastMonth => "last_month",
            PresetKey::Last3Months => "last_3_months",
            PresetKey::FirstHalf => "first_half",
            PresetKey::SecondHalf => "second_half",
            PresetKey::Q1 => "q1",
            PresetKey::Q2 => "q2",
            PresetKey::Q3 => "q3",
            PresetKey::Q4 => "q4",
            PresetKey::Custom => "custom",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        PRESETS
            .iter()
            .map(|preset| preset.key)
            .find(|key| key.code() == code)
    }
}

/// Entry of the preset catalog.
#[derive(Debug, Clone, Copy)]
pub struct PresetDefinition {
    pub key: PresetKey,
    pub label: &'static str,
    resolver: Option<fn(NaiveDate) -> Option<DateRange>>,
}

impl PresetDefinition {
    /// Range of this preset relative to `today`.
    ///
    /// `None` for `custom`, which only marks manual selection.
    pub fn resolve(&self, today: NaiveDate) -> Option<DateRange> {
        self.resolver.and_then(|resolve| resolve(today))
    }

    pub fn is_custom(&self) -> bool {
        self.resolver.is_none()
    }
}

/// Catalog in display order.
static PRESETS: [PresetDefinition; 14] = [
    PresetDefinition {
        key: PresetKey::Today,
        label: "Today",
        resolver: Some(today),
    },
    PresetDefinition {
        key: PresetKey::Yesterday,
        label: "Yesterday",
        resolver: Some(yesterday),
    },
    PresetDefinition {
        key: PresetKey::ThisWeek,
        label: "This Week",
        resolver: Some(this_week),
    },
    PresetDefinition {
        key: PresetKey::LastWeek,
        label: "Last Week",
        resolver: Some(last_week),
    },
    PresetDefinition {
        key: PresetKey::ThisMonth,
        label: "This Month",
        resolver: Some(this_month),
    },
    PresetDefinition {
        key: PresetKey::LastMonth,
        label: "Last Month",
        resolver: Some(last_month),
    },
    PresetDefinition {
        key: PresetKey::Last3Months,
        label: "Last 3 Months",
        resolver: Some(last_3_months),
    },
    PresetDefinition {
        key: PresetKey::FirstHalf,
        label: "First Half",
        resolver: Some(first_half),
    },
    PresetDefinition {
        key: PresetKey::SecondHalf,
        label: "Second Half",
        resolver: Some(second_half),
    },
    PresetDefinition {
        key: PresetKey::Q1,
        label: "Q1",
        resolver: Some(q1),
    },
    PresetDefinition {
        key: PresetKey::Q2,
        label: "Q2",
        resolver: Some(q2),
    },
    PresetDefinition {
        key: PresetKey::Q3,
        label: "Q3",
        resolver: Some(q3),
    },
    PresetDefinition {
        key: PresetKey::Q4,
        label: "Q4",
        resolver: Some(q4),
    },
    PresetDefinition {
        key: PresetKey::Custom,
        label: "Custom",
        resolver: None,
    },
];

pub fn list_presets() -> &'static [PresetDefinition] {
    &PRESETS
}

pub fn get_preset(key: PresetKey) -> Option<&'static PresetDefinition> {
    PRESETS.iter().find(|preset| preset.key == key)
}

pub fn get_preset_by_name(name: &str) -> Option<&'static PresetDefinition> {
    PresetKey::from_code(name).and_then(get_preset)
}

/// Range shown before the user picks anything: one month back to today.
///
/// The day of month is clamped, so Mar 31 goes back to the last day of
/// February.
pub fn default_range(today: NaiveDate) -> DateRange {
    let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    DateRange::new(start, today)
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// First and last day of `months` consecutive months starting at `year`/`month`.
fn month_span(year: i32, month: u32, months: u32) -> Option<DateRange> {
    let start = first_of_month(year, month)?;
    let end = start.checked_add_months(Months::new(months))?.pred_opt()?;
    Some(DateRange::new(start, end))
}

fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
}

fn today(today: NaiveDate) -> Option<DateRange> {
    Some(DateRange::single(today))
}

fn yesterday(today: NaiveDate) -> Option<DateRange> {
    today.pred_opt().map(DateRange::single)
}

fn this_week(today: NaiveDate) -> Option<DateRange> {
    let monday = monday_of(today)?;
    Some(DateRange::new(monday, monday.checked_add_days(Days::new(6))?))
}

fn last_week(today: NaiveDate) -> Option<DateRange> {
    this_week(today.checked_sub_days(Days::new(7))?)
}

fn this_month(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), today.month(), 1)
}

fn last_month(today: NaiveDate) -> Option<DateRange> {
    let previous = first_of_month(today.year(), today.month())?.checked_sub_months(Months::new(1))?;
    month_span(previous.year(), previous.month(), 1)
}

fn last_3_months(today: NaiveDate) -> Option<DateRange> {
    let first = first_of_month(today.year(), today.month())?.checked_sub_months(Months::new(3))?;
    month_span(first.year(), first.month(), 3)
}

fn first_half(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), 1, 6)
}

fn second_half(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), 7, 6)
}

fn q1(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), 1, 3)
}

fn q2(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), 4, 3)
}

fn q3(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), 7, 3)
}

fn q4(today: NaiveDate) -> Option<DateRange> {
    month_span(today.year(), 10, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn resolve(key: PresetKey, today: NaiveDate) -> DateRange {
        get_preset(key).unwrap().resolve(today).unwrap()
    }

    #[test]
    fn test_catalog_order() {
        let codes: Vec<&str> = list_presets().iter().map(|p| p.key.code()).collect();
        assert_eq!(
            codes,
            vec![
                "today",
                "yesterday",
                "this_week",
                "last_week",
                "this_month",
                "last_month",
                "last_3_months",
                "first_half",
                "second_half",
                "q1",
                "q2",
                "q3",
                "q4",
                "custom",
            ]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(get_preset_by_name("q3").unwrap().key, PresetKey::Q3);
        assert_eq!(get_preset_by_name("last_3_months").unwrap().label, "Last 3 Months");
        assert!(get_preset_by_name("next_week").is_none());
        assert!(get_preset_by_name("").is_none());
    }

    #[test]
    fn test_custom_has_no_range() {
        let custom = get_preset(PresetKey::Custom).unwrap();
        assert!(custom.is_custom());
        assert_eq!(custom.resolve(d(2024, 3, 15)), None);
    }

    #[test]
    fn test_day_presets() {
        let today = d(2024, 3, 1);
        assert_eq!(resolve(PresetKey::Today, today), DateRange::single(today));
        assert_eq!(resolve(PresetKey::Yesterday, today), DateRange::single(d(2024, 2, 29)));
    }

    #[test]
    fn test_this_week_is_monday_to_sunday() {
        // 2024-03-15 is a Friday
        for today in [d(2024, 3, 11), d(2024, 3, 15), d(2024, 3, 17)] {
            let week = resolve(PresetKey::ThisWeek, today);
            assert_eq!(week.start.weekday(), Weekday::Mon);
            assert_eq!(week.end.weekday(), Weekday::Sun);
            assert_eq!(week.days(), 7);
            assert!(week.contains(today));
        }
        assert_eq!(
            resolve(PresetKey::ThisWeek, d(2024, 3, 15)),
            DateRange::new(d(2024, 3, 11), d(2024, 3, 17))
        );
    }

    #[test]
    fn test_last_week_crosses_year() {
        assert_eq!(
            resolve(PresetKey::LastWeek, d(2024, 1, 3)),
            DateRange::new(d(2023, 12, 25), d(2023, 12, 31))
        );
    }

    #[test]
    fn test_month_presets() {
        let today = d(2024, 3, 15);
        assert_eq!(
            resolve(PresetKey::ThisMonth, today),
            DateRange::new(d(2024, 3, 1), d(2024, 3, 31))
        );
        assert_eq!(
            resolve(PresetKey::LastMonth, today),
            DateRange::new(d(2024, 2, 1), d(2024, 2, 29))
        );
        assert_eq!(
            resolve(PresetKey::LastMonth, d(2024, 1, 31)),
            DateRange::new(d(2023, 12, 1), d(2023, 12, 31))
        );
        assert_eq!(
            resolve(PresetKey::Last3Months, today),
            DateRange::new(d(2023, 12, 1), d(2024, 2, 29))
        );
    }

    #[test]
    fn test_quarters_partition_the_year() {
        let today = d(2023, 11, 2);
        let quarters: Vec<DateRange> = [PresetKey::Q1, PresetKey::Q2, PresetKey::Q3, PresetKey::Q4]
            .into_iter()
            .map(|key| resolve(key, today))
            .collect();

        assert_eq!(quarters[0].start, d(2023, 1, 1));
        assert_eq!(quarters[3].end, d(2023, 12, 31));
        for pair in quarters.windows(2) {
            assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
        }
        let total: i64 = quarters.iter().map(DateRange::days).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn test_halves() {
        let today = d(2024, 2, 10);
        assert_eq!(
            resolve(PresetKey::FirstHalf, today),
            DateRange::new(d(2024, 1, 1), d(2024, 6, 30))
        );
        assert_eq!(
            resolve(PresetKey::SecondHalf, today),
            DateRange::new(d(2024, 7, 1), d(2024, 12, 31))
        );
    }

    #[test]
    fn test_resolvers_follow_today() {
        let preset = get_preset(PresetKey::Today).unwrap();
        assert_ne!(preset.resolve(d(2024, 3, 15)), preset.resolve(d(2024, 3, 16)));
    }

    #[test]
    fn test_default_range() {
        assert_eq!(
            default_range(d(2024, 3, 15)),
            DateRange::new(d(2024, 2, 15), d(2024, 3, 15))
        );
        assert_eq!(
            default_range(d(2024, 3, 31)),
            DateRange::new(d(2024, 2, 29), d(2024, 3, 31))
        );
    }
}
