use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::range::DateRange;

/// Six rows of seven days, so every month renders at the same height.
pub const GRID_CELLS: usize = 42;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Which calendar of the dual picker a grid belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSide {
    /// Picks the range start.
    Left,
    /// Picks the range end.
    Right,
}

/// One rendered day of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_in_range: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_selectable: bool,
    pub is_disabled: bool,
    /// Alignment filler rendered as an empty cell.
    pub is_placeholder: bool,
}

impl CalendarDayCell {
    fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            is_current_month: false,
            is_today: false,
            is_in_range: false,
            is_range_start: false,
            is_range_end: false,
            is_selectable: false,
            is_disabled: true,
            is_placeholder: true,
        }
    }

    fn adjacent(date: NaiveDate) -> Self {
        Self {
            is_disabled: false,
            is_placeholder: false,
            ..Self::placeholder(date)
        }
    }

    fn in_month(date: NaiveDate, range: &DateRange, side: CalendarSide, today: NaiveDate) -> Self {
        let is_selectable = match side {
            CalendarSide::Left => date != range.end,
            CalendarSide::Right => date != range.start,
        };
        Self {
            date,
            is_current_month: true,
            is_today: date == today,
            is_in_range: range.contains_strictly(date),
            is_range_start: side == CalendarSide::Left && date == range.start,
            is_range_end: side == CalendarSide::Right && date == range.end,
            is_selectable,
            is_disabled: !is_selectable,
            is_placeholder: false,
        }
    }
}

/// Grid generator bound to one side of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGridGenerator {
    pub side: CalendarSide,
    pub hide_other_month_days: bool,
}

impl MonthGridGenerator {
    pub fn new(side: CalendarSide, hide_other_month_days: bool) -> Self {
        Self {
            side,
            hide_other_month_days,
        }
    }

    pub fn generate(
        &self,
        month: NaiveDate,
        range: &DateRange,
        today: NaiveDate,
    ) -> Vec<CalendarDayCell> {
        generate_grid(month, range, self.side, self.hide_other_month_days, today)
    }
}

/// Build the 42 cells of `month` for one side of the picker.
///
/// Only the year and month of `month` matter. With `hide_other_month_days`
/// the days around the month become placeholders; otherwise they are shown
/// as muted adjacent-month days that cannot be picked.
pub fn generate_grid(
    month: NaiveDate,
    range: &DateRange,
    side: CalendarSide,
    hide_other_month_days: bool,
    today: NaiveDate,
) -> Vec<CalendarDayCell> {
    let first = start_of_month(month);
    let leading = first.weekday().num_days_from_monday() as u64;
    let Some(grid_start) = first.checked_sub_days(Days::new(leading)) else {
        return Vec::new();
    };

    grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            if date.year() == first.year() && date.month() == first.month() {
                CalendarDayCell::in_month(date, range, side, today)
            } else if hide_other_month_days {
                CalendarDayCell::placeholder(date)
            } else {
                CalendarDayCell::adjacent(date)
            }
        })
        .collect()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move the displayed month by `delta` months, normalized to the 1st.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = start_of_month(month);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// Month picked through the month/year selectors.
///
/// `month_index` is zero based. Returns `None` outside the year window or
/// for a month index above 11.
pub fn jump_to_month(month_index: u32, year: i32, window: &YearWindow) -> Option<NaiveDate> {
    if month_index > 11 || !window.contains(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month_index + 1, 1)
}

/// Header text of a month grid, e.g. "March 2024".
pub fn month_title(month: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[month.month0() as usize], month.year())
}

/// Years offered by the year selector, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub first: i32,
    pub last: i32,
}

impl YearWindow {
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    /// `first_year` through `today`'s year plus `years_ahead`.
    pub fn around(today: NaiveDate, first_year: i32, years_ahead: i32) -> Self {
        Self::new(first_year, today.year() + years_ahead)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }
}
