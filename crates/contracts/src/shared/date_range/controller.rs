use chrono::NaiveDate;

use super::calendar_grid::{
    jump_to_month, shift_month, start_of_month, CalendarDayCell, CalendarSide, MonthGridGenerator,
    YearWindow,
};
use super::clock::{Clock, SystemClock};
use super::config::PickerConfig;
use super::filter_storage::{
    delete_filter, load_filter, save_filter, KeyValueStore, PersistedFilter,
};
use super::format::format_range_display;
use super::preset::{default_range, get_preset, PresetKey};
use super::query::{QueryParamSink, RangeQuery};
use super::range::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Everything the picker shows, owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub selected_preset: PresetKey,
    pub left_month: NaiveDate,
    pub right_month: NaiveDate,
    /// "Remember this filter" checkbox.
    pub save_filter: bool,
    pub panel: PanelState,
}

impl PickerState {
    fn new(range: DateRange, preset: PresetKey, save_filter: bool) -> Self {
        let mut state = Self {
            start_date: range.start,
            end_date: range.end,
            selected_preset: preset,
            left_month: range.start,
            right_month: range.end,
            save_filter,
            panel: PanelState::Closed,
        };
        state.pin_months();
        state
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    fn set_range(&mut self, range: DateRange) {
        self.start_date = range.start;
        self.end_date = range.end;
    }

    /// Show the start month on the left and the end month on the right.
    fn pin_months(&mut self) {
        self.left_month = start_of_month(self.start_date);
        self.right_month = start_of_month(self.end_date);
    }

    fn month_mut(&mut self, side: CalendarSide) -> &mut NaiveDate {
        match side {
            CalendarSide::Left => &mut self.left_month,
            CalendarSide::Right => &mut self.right_month,
        }
    }
}

/// State machine behind the dual-calendar range picker.
///
/// Every handler applies all of its changes, boundary repair included,
/// before returning. Nothing outside the controller mutates the range.
pub struct DateRangePickerController<S, C = SystemClock> {
    config: PickerConfig,
    store: S,
    clock: C,
    left: MonthGridGenerator,
    right: MonthGridGenerator,
    state: PickerState,
    /// State as of mount or the last save; restored on dismissal.
    committed: PickerState,
}

impl<S: KeyValueStore, C: Clock> DateRangePickerController<S, C> {
    /// Build the initial state from the saved filter, or the default range.
    pub fn mount(config: PickerConfig, store: S, clock: C) -> Self {
        let mut range = default_range(clock.today());
        let mut preset = PresetKey::Custom;

        let persisted = load_filter(&store, &config.storage_key);
        if let Some(filter) = &persisted {
            if let Ok(saved) = filter.range() {
                range = saved;
            }
            match (filter.preset(), filter.preset_name.as_deref()) {
                (Some(key), _) => preset = key,
                (None, Some(name)) => {
                    log::debug!("Unknown saved preset '{}', keeping {}", name, preset.code())
                }
                (None, None) => {}
            }
        }

        let state = PickerState::new(range, preset, persisted.is_some());
        log::debug!(
            "Date picker '{}' mounted with {}",
            config.storage_key,
            format_range_display(&state.range())
        );

        Self {
            left: MonthGridGenerator::new(CalendarSide::Left, config.hide_other_month_days),
            right: MonthGridGenerator::new(CalendarSide::Right, config.hide_other_month_days),
            committed: state.clone(),
            state,
            config,
            store,
            clock,
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn range(&self) -> DateRange {
        self.state.range()
    }

    /// Range as of mount or the last save.
    pub fn committed_range(&self) -> DateRange {
        self.committed.range()
    }

    pub fn is_open(&self) -> bool {
        self.state.panel == PanelState::Open
    }

    pub fn year_window(&self) -> YearWindow {
        self.config.year_window(self.clock.today())
    }

    /// Text of the trigger input.
    pub fn display_text(&self) -> String {
        format_range_display(&self.range())
    }

    pub fn left_grid(&self) -> Vec<CalendarDayCell> {
        self.left
            .generate(self.state.left_month, &self.range(), self.clock.today())
    }

    pub fn right_grid(&self) -> Vec<CalendarDayCell> {
        self.right
            .generate(self.state.right_month, &self.range(), self.clock.today())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn open(&mut self) {
        self.state.panel = PanelState::Open;
    }

    /// Trigger click: open, or close without saving.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.dismiss();
        } else {
            self.open();
        }
    }

    /// Close without saving and drop the uncommitted selection.
    ///
    /// Returns whether the panel was open.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = PickerState {
            panel: PanelState::Closed,
            ..self.committed.clone()
        };
        true
    }

    pub fn select_preset(&mut self, key: PresetKey) {
        let Some(preset) = get_preset(key) else {
            return;
        };
        if let Some(range) = preset.resolve(self.clock.today()) {
            self.state.set_range(range);
            self.state.pin_months();
        }
        self.state.selected_preset = key;
        self.state.save_filter = false;
    }

    /// Preset click by key name; unknown names are ignored.
    pub fn select_preset_by_name(&mut self, name: &str) {
        match PresetKey::from_code(name) {
            Some(key) => self.select_preset(key),
            None => log::debug!("Ignoring unknown preset '{}'", name),
        }
    }

    /// Day picked on the left calendar: new start.
    ///
    /// A start past the end pushes the end to the following day.
    pub fn select_left_day(&mut self, date: NaiveDate) {
        self.state.start_date = date;
        if date > self.state.end_date {
            self.state.end_date = date.succ_opt().unwrap_or(date);
        }
        self.mark_custom();
    }

    /// Day picked on the right calendar: new end.
    ///
    /// An end before the start pulls the start to the previous day and moves
    /// the left calendar to the picked month.
    pub fn select_right_day(&mut self, date: NaiveDate) {
        self.state.end_date = date;
        if date < self.state.start_date {
            self.state.start_date = date.pred_opt().unwrap_or(date);
            self.state.left_month = start_of_month(date);
        }
        self.mark_custom();
    }

    pub fn select_day(&mut self, side: CalendarSide, date: NaiveDate) {
        match side {
            CalendarSide::Left => self.select_left_day(date),
            CalendarSide::Right => self.select_right_day(date),
        }
    }

    /// Replace the displayed month of one calendar. The range is untouched.
    pub fn change_month(&mut self, side: CalendarSide, month: NaiveDate) {
        *self.state.month_mut(side) = start_of_month(month);
    }

    /// Month/year selector change; ignored outside the year window.
    pub fn jump_to(&mut self, side: CalendarSide, month_index: u32, year: i32) -> bool {
        match jump_to_month(month_index, year, &self.year_window()) {
            Some(month) => {
                self.change_month(side, month);
                true
            }
            None => false,
        }
    }

    pub fn prev_month(&mut self, side: CalendarSide) {
        let month = self.state.month_mut(side);
        *month = shift_month(*month, -1);
    }

    pub fn next_month(&mut self, side: CalendarSide) {
        let month = self.state.month_mut(side);
        *month = shift_month(*month, 1);
    }

    pub fn set_save_filter(&mut self, save: bool) {
        self.state.save_filter = save;
    }

    /// Back to the default range without closing the panel.
    pub fn clear(&mut self) {
        self.state.set_range(default_range(self.clock.today()));
        self.state.pin_months();
        self.state.selected_preset = PresetKey::Custom;
        self.state.save_filter = false;
    }

    /// Commit the selection: URL parameters, then the saved filter, then close.
    ///
    /// With "remember this filter" unchecked any saved filter is removed.
    /// Storage and URL failures are logged and do not block closing.
    pub fn save(&mut self, query_sink: &mut impl QueryParamSink) -> RangeQuery {
        let range = self.range();
        let query = RangeQuery::from_range(&range);
        if let Err(e) = query_sink.replace_range(&query) {
            log::warn!("Could not update URL with date range: {}", e);
        }

        let key = self.config.storage_key.as_str();
        let stored = if self.state.save_filter {
            let filter = PersistedFilter::new(&range, Some(self.state.selected_preset));
            save_filter(&mut self.store, key, &filter)
        } else {
            delete_filter(&mut self.store, key)
        };
        if let Err(e) = stored {
            log::warn!("Could not update saved date filter '{}': {}", key, e);
        }

        self.state.panel = PanelState::Closed;
        self.committed = self.state.clone();
        log::debug!("Date range committed: {}", self.display_text());
        query
    }

    fn mark_custom(&mut self) {
        self.state.selected_preset = PresetKey::Custom;
        self.state.save_filter = false;
    }
}
