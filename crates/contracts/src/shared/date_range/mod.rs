//! Dual-calendar date range picker: range model, presets, month grids,
//! persisted filter and the controller that ties them together.
//!
//! Everything here is target independent; browser adapters live in the
//! frontend crate and plug in through [`KeyValueStore`], [`QueryParamSink`]
//! and [`Clock`].

pub mod calendar_grid;
pub mod clock;
pub mod config;
pub mod controller;
pub mod filter_storage;
pub mod format;
pub mod preset;
pub mod query;
pub mod range;

pub use calendar_grid::{
    generate_grid, jump_to_month, month_title, shift_month, start_of_month, CalendarDayCell,
    CalendarSide, MonthGridGenerator, YearWindow, GRID_CELLS, MONTH_NAMES, WEEKDAY_LABELS,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PickerConfig;
pub use controller::{DateRangePickerController, PanelState, PickerState};
pub use filter_storage::{FilterError, KeyValueStore, MemoryStore, PersistedFilter, StorageError};
pub use preset::{
    default_range, get_preset, get_preset_by_name, list_presets, PresetDefinition, PresetKey,
};
pub use query::{QueryError, QueryParamSink, RangeQuery};
pub use range::DateRange;
