use chrono::NaiveDate;
use serde::Deserialize;

use super::calendar_grid::YearWindow;

pub const DEFAULT_STORAGE_KEY: &str = "datepicker-default";

/// Picker settings supplied by the host page.
///
/// Every field has a default, so hosts can pass a partial JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Local storage key of the saved filter.
    pub storage_key: String,
    /// Render days of adjacent months as empty placeholders.
    pub hide_other_month_days: bool,
    /// First year offered by the year selector.
    pub first_year: i32,
    /// Years after the current one offered by the year selector.
    pub years_ahead: i32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            hide_other_month_days: true,
            first_year: 2010,
            years_ahead: 10,
        }
    }
}

impl PickerConfig {
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn year_window(&self, today: NaiveDate) -> YearWindow {
        YearWindow::around(today, self.first_year, self.years_ahead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.storage_key, "datepicker-default");
        assert!(config.hide_other_month_days);

        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(config.year_window(today), YearWindow::new(2010, 2036));
    }

    #[test]
    fn test_partial_json() {
        let config = PickerConfig::from_json(r#"{"storage_key":"quiz-report-range"}"#).unwrap();
        assert_eq!(config, PickerConfig::with_storage_key("quiz-report-range"));

        let config =
            PickerConfig::from_json(r#"{"hide_other_month_days":false,"years_ahead":2}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(!config.hide_other_month_days);
        assert_eq!(config.years_ahead, 2);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PickerConfig::from_json(r#"{"first_year":"soon"}"#).is_err());
    }
}
