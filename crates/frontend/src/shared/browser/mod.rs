//! Browser-backed implementations of the picker's collaborators.

pub mod local_storage;
pub mod pointer_down;
pub mod url_query;

pub use local_storage::LocalStorage;
pub use pointer_down::{DocumentPointerDown, RegionElement};
pub use url_query::BrowserQuery;
