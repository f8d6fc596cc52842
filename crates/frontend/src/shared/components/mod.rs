pub mod calendar_month;
pub mod click_outside;
pub mod date_range_picker;

pub use calendar_month::CalendarMonth;
pub use click_outside::ClickOutside;
pub use date_range_picker::DateRangePicker;
