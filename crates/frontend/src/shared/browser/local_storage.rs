use contracts::shared::date_range::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::window;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

fn storage_error(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// `window.localStorage`.
///
/// Every call looks the storage up again, so a missing window (or storage
/// disabled by the browser) shows up as [`StorageError::Unavailable`]
/// instead of a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        get_local_storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        get_local_storage()?.remove_item(key).map_err(storage_error)
    }
}
