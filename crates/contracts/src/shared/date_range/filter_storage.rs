use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::{format_iso, parse_iso};
use super::preset::PresetKey;
use super::range::DateRange;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No storage in this environment (no window, private mode, SSR).
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Storage error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Malformed filter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date in filter: {0:?}")]
    InvalidDate(String),

    #[error("Filter starts after it ends: {start} > {end}")]
    Unordered { start: String, end: String },
}

/// String key-value store holding the persisted filter.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Saved picker filter, stored as JSON under the configured key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedFilter {
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "presetName", default, skip_serializing_if = "Option::is_none")]
    pub preset_name: Option<String>,
}

impl PersistedFilter {
    pub fn new(range: &DateRange, preset: Option<PresetKey>) -> Self {
        Self {
            start_date: format_iso(range.start),
            end_date: format_iso(range.end),
            preset_name: preset.map(|key| key.code().to_string()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, FilterError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Stored range; both dates must parse and be in order.
    pub fn range(&self) -> Result<DateRange, FilterError> {
        let start = parse_iso(&self.start_date)
            .ok_or_else(|| FilterError::InvalidDate(self.start_date.clone()))?;
        let end = parse_iso(&self.end_date)
            .ok_or_else(|| FilterError::InvalidDate(self.end_date.clone()))?;

        let range = DateRange::new(start, end);
        if !range.is_ordered() {
            return Err(FilterError::Unordered {
                start: self.start_date.clone(),
                end: self.end_date.clone(),
            });
        }
        Ok(range)
    }

    /// Preset stored with the filter, if it names a known preset.
    pub fn preset(&self) -> Option<PresetKey> {
        self.preset_name.as_deref().and_then(PresetKey::from_code)
    }
}

/// Read the filter under `key`.
///
/// Missing, unreadable and malformed entries all yield `None`; the reason is
/// logged.
pub fn load_filter(store: &impl KeyValueStore, key: &str) -> Option<PersistedFilter> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("Could not read saved date filter '{}': {}", key, e);
            return None;
        }
    };

    let filter = match PersistedFilter::from_json(&raw) {
        Ok(filter) => filter,
        Err(e) => {
            log::warn!("Ignoring saved date filter '{}': {}", key, e);
            return None;
        }
    };

    if let Err(e) = filter.range() {
        log::warn!("Ignoring saved date filter '{}': {}", key, e);
        return None;
    }
    Some(filter)
}

pub fn save_filter(
    store: &mut impl KeyValueStore,
    key: &str,
    filter: &PersistedFilter,
) -> Result<(), StorageError> {
    let raw = filter
        .to_json()
        .map_err(|e| StorageError::Backend(e.to_string()))?;
    store.set(key, &raw)
}

pub fn delete_filter(store: &mut impl KeyValueStore, key: &str) -> Result<(), StorageError> {
    store.remove(key)
}
