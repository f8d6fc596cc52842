use contracts::shared::date_range::{QueryError, QueryParamSink, RangeQuery};
use wasm_bindgen::JsValue;
use web_sys::window;

const RANGE_KEYS: [&str; 2] = ["start_date", "end_date"];

/// Raw `key=value` pairs of a search string, in page order.
fn query_pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn pair_key(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(key, _)| key)
}

/// Set `start_date`/`end_date` in a `location.search` string.
///
/// Only those two pairs are touched: the other parameters keep their order
/// and raw encoding, repeated and bracketed keys included. Returns the new
/// search string with its leading `?`.
pub fn merge_range_query(search: &str, query: &RangeQuery) -> Result<String, QueryError> {
    let encoded = serde_qs::to_string(query).map_err(|e| QueryError::Encode(e.to_string()))?;
    let mut pending: Vec<&str> = encoded.split('&').collect();

    let mut pairs: Vec<&str> = Vec::new();
    for pair in query_pairs(search) {
        let key = pair_key(pair);
        if !RANGE_KEYS.contains(&key) {
            pairs.push(pair);
            continue;
        }
        // First occurrence is replaced in place, later duplicates dropped
        if let Some(index) = pending.iter().position(|p| pair_key(p) == key) {
            pairs.push(pending.remove(index));
        }
    }
    pairs.extend(pending);

    Ok(format!("?{}", pairs.join("&")))
}

/// Range parameters of a `location.search` string, when both are present.
/// Other parameters are not parsed, so their shape does not matter.
pub fn read_range_query(search: &str) -> Option<RangeQuery> {
    let range_pairs = query_pairs(search)
        .filter(|pair| RANGE_KEYS.contains(&pair_key(pair)))
        .collect::<Vec<_>>()
        .join("&");
    serde_qs::from_str::<RangeQuery>(&range_pairs).ok()
}

/// Range parameters of the current page.
pub fn current_range_query() -> Option<RangeQuery> {
    let search = window()?.location().search().ok()?;
    read_range_query(&search)
}

/// Current page URL, updated through `history.replaceState` so the page
/// neither reloads nor grows the history.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserQuery;

impl QueryParamSink for BrowserQuery {
    fn replace_range(&mut self, query: &RangeQuery) -> Result<(), QueryError> {
        let w = window().ok_or(QueryError::Unavailable)?;
        let location = w.location();
        let search = location.search().unwrap_or_default();
        let new_search = merge_range_query(&search, query)?;

        // Only update URL if it actually changed
        if search == new_search {
            return Ok(());
        }

        let pathname = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = format!("{}{}{}", pathname, new_search, hash);

        let history = w.history().map_err(|_| QueryError::Unavailable)?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|err| QueryError::Encode(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(start: &str, end: &str) -> RangeQuery {
        RangeQuery {
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_merge_into_empty_search() {
        assert_eq!(
            merge_range_query("", &query("20240215", "20240315")).unwrap(),
            "?start_date=20240215&end_date=20240315"
        );
        assert_eq!(
            merge_range_query("?", &query("20240215", "20240315")).unwrap(),
            "?start_date=20240215&end_date=20240315"
        );
    }

    #[test]
    fn test_merge_replaces_range_in_place() {
        let search = "?tab=attempts&start_date=20230101&page=2";
        let merged = merge_range_query(search, &query("20240101", "20240331"));
        assert_eq!(
            merged.unwrap(),
            "?tab=attempts&start_date=20240101&page=2&end_date=20240331"
        );
    }

    #[test]
    fn test_merge_keeps_repeated_and_bracketed_keys() {
        let range = query("20240101", "20240331");
        assert_eq!(
            merge_range_query("?tag=a&tag=b&tab=attempts", &range).unwrap(),
            "?tag=a&tag=b&tab=attempts&start_date=20240101&end_date=20240331"
        );
        assert_eq!(
            merge_range_query("?ids[0]=1&tab=attempts", &range).unwrap(),
            "?ids[0]=1&tab=attempts&start_date=20240101&end_date=20240331"
        );
        assert_eq!(
            merge_range_query("?filter%5Bcourse%5D=7&tab=attempts", &range).unwrap(),
            "?filter%5Bcourse%5D=7&tab=attempts&start_date=20240101&end_date=20240331"
        );
    }

    #[test]
    fn test_merge_drops_duplicate_range_keys() {
        assert_eq!(
            merge_range_query(
                "?end_date=1&start_date=2&end_date=3&flag",
                &query("20240101", "20240331")
            )
            .unwrap(),
            "?end_date=20240331&start_date=20240101&flag"
        );
    }

    #[test]
    fn test_read_range_query() {
        assert_eq!(
            read_range_query("?tab=attempts&start_date=20240101&end_date=20240331"),
            Some(query("20240101", "20240331"))
        );
        assert_eq!(read_range_query("?start_date=20240101"), None);
        assert_eq!(read_range_query(""), None);
        assert_eq!(
            read_range_query("?tag=a&tag=b&filter[course]=7&start_date=20240101&end_date=20240331"),
            Some(query("20240101", "20240331"))
        );
    }
}
