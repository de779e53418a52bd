use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// CDN serving every relative asset path the listings hand out.
pub const CDN_BASE: &str = "https://qiniu.pattern.swarma.org/";

/// Portal origin used when an item carries no canonical link of its own.
pub const PORTAL_BASE: &str = "https://pattern.swarma.org";

/// Image lists are cut down to this many entries after resolution.
pub const THUMBNAIL_LIMIT: usize = 7;

/// Upstream author and label fields arrive as an array of strings, a
/// comma-separated string, or null, depending on the record. Decoding them
/// into one enum keeps that ambiguity out of the normalizers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Many(Vec<Value>),
    One(String),
    Other(Value),
}

impl TextOrList {
    /// Trimmed, non-empty entries. Array members that are not strings are
    /// dropped rather than rejected.
    pub fn entries(&self) -> Vec<String> {
        match self {
            TextOrList::Many(items) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
            TextOrList::One(text) => split_entries(text),
            TextOrList::Other(_) => Vec::new(),
        }
    }
}

/// Splits a comma-separated field, trimming and dropping empty segments.
pub fn split_entries(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Entries of an optional heterogeneous field, substituting a single
/// placeholder when nothing usable remains.
pub fn entries_or(field: Option<&TextOrList>, placeholder: &str) -> Vec<String> {
    let entries = field.map(TextOrList::entries).unwrap_or_default();
    if entries.is_empty() {
        vec![placeholder.to_string()]
    } else {
        entries
    }
}

/// Resolves a possibly-relative asset path to an absolute URL. Already
/// absolute URLs pass through untouched, protocol-relative paths get a
/// scheme, anything else is served off the CDN. Empty input stays empty.
pub fn resolve_asset_url(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http") {
        return trimmed.to_string();
    }
    if trimmed.starts_with("//") {
        return format!("https:{trimmed}");
    }
    format!("{CDN_BASE}{trimmed}")
}

/// Resolves an image list and caps it at [`THUMBNAIL_LIMIT`] entries,
/// preserving input order. Non-string and empty members are dropped.
pub fn resolve_thumbnails(images: Option<&[Value]>) -> Vec<String> {
    images
        .unwrap_or_default()
        .iter()
        .filter_map(|image| image.as_str())
        .map(resolve_asset_url)
        .filter(|url| !url.is_empty())
        .take(THUMBNAIL_LIMIT)
        .collect()
}

/// Parses the handful of date shapes the listings use. Returns the calendar
/// date; time-of-day is never displayed.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.date());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(parsed);
    }
    trimmed
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// Normalizes a submission date into the display string plus the publication
/// year derived from it. An absent or unparseable date becomes today.
pub fn submission_date(raw: &str) -> (String, i32) {
    match parse_flexible_date(raw) {
        Some(date) => (raw.trim().to_string(), date.year()),
        None => {
            let today = Local::now().date_naive();
            (today.format("%Y-%m-%d").to_string(), today.year())
        }
    }
}

/// First `limit` characters of a content body, for card descriptions.
pub fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blank_segments() {
        assert_eq!(split_entries("Alice, , Bob"), vec!["Alice", "Bob"]);
    }

    #[test]
    fn resolve_is_idempotent_on_absolute_urls() {
        let absolute = "https://example.org/a.png";
        assert_eq!(resolve_asset_url(absolute), absolute);
        assert_eq!(resolve_asset_url(""), "");
        assert_eq!(
            resolve_asset_url("foo/bar.png"),
            format!("{CDN_BASE}foo/bar.png")
        );
        assert_eq!(
            resolve_asset_url("//cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("复杂科学入门", 4), "复杂科学");
    }
}
