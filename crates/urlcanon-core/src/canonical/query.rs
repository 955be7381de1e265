//! Raw query-string filtering.
//!
//! Works on the already percent-encoded query so that surviving parameters are
//! re-emitted byte-for-byte. Keys are decoded only to compare them.

use std::borrow::Cow;

use url::form_urlencoded;

use crate::denylist::Denylist;

/// Query after tracking parameters were removed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FilteredQuery {
    /// Surviving segments joined with `&`; `None` when nothing survived.
    pub query: Option<String>,
    /// Decoded keys that were removed, in original order.
    pub removed: Vec<String>,
}

/// Decoded key of a single `key=value` segment. Empty for an empty segment.
pub(crate) fn segment_key(segment: &str) -> Cow<'_, str> {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(key, _)| key)
        .unwrap_or(Cow::Borrowed(""))
}

/// Decoded keys present in `query` that the denylist matches, duplicates included.
pub(crate) fn tracking_keys(query: &str, denylist: &Denylist) -> Vec<String> {
    query
        .split('&')
        .map(segment_key)
        .filter(|key| denylist.contains(key))
        .map(Cow::into_owned)
        .collect()
}

/// Removes denylisted segments from `query`.
///
/// Returns `None` when no segment matched, so callers can keep the URL as-is.
/// Once something is removed, empty segments (`a=1&&b=2`) are dropped too.
pub(crate) fn filter_query(query: &str, denylist: &Denylist) -> Option<FilteredQuery> {
    let mut kept: Vec<&str> = Vec::new();
    let mut removed = Vec::new();

    for segment in query.split('&') {
        let key = segment_key(segment);
        if denylist.contains(&key) {
            removed.push(key.into_owned());
        } else if !segment.is_empty() {
            kept.push(segment);
        }
    }

    if removed.is_empty() {
        return None;
    }

    let query = if kept.is_empty() {
        None
    } else {
        Some(kept.join("&"))
    };
    Some(FilteredQuery { query, removed })
}
