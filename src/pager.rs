use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::HubError;

/// Listings are 1-indexed.
pub const START_PAGE: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One page of a paginated listing. `data` decodes leniently: a missing or
/// non-array field becomes `None`, and individually malformed records are
/// skipped instead of failing the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "lenient_records")]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

fn lenient_records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// Walks a paginated listing sequentially from [`START_PAGE`], accumulating
/// records in request order.
///
/// Stops when the reported `current_page` reaches `last_page`, when the
/// optional `page_cap` is hit, or when a page carries no record array
/// (end-of-data). A response without pagination metadata is treated as a
/// single page. Any request failure discards the accumulated records and
/// propagates, so callers never observe a silently truncated collection.
pub fn collect_pages<T, F>(mut fetch_page: F, page_cap: Option<u32>) -> Result<Vec<T>, HubError>
where
    F: FnMut(u32) -> Result<Page<T>, HubError>,
{
    let mut records = Vec::new();
    let mut page = START_PAGE;
    loop {
        let batch = fetch_page(page)?;
        let Some(data) = batch.data else {
            debug!(page, "page carried no record array, treating as end of data");
            break;
        };
        debug!(page, count = data.len(), "collected page");
        records.extend(data);
        let current = batch
            .meta
            .as_ref()
            .map(|meta| meta.current_page)
            .unwrap_or(page);
        let last = batch.meta.as_ref().map(|meta| meta.last_page).unwrap_or(1);
        if current >= last {
            break;
        }
        if page_cap.is_some_and(|cap| page >= cap) {
            debug!(page, cap = page_cap, "page cap reached");
            break;
        }
        page += 1;
    }
    Ok(records)
}
