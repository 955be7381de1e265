//! URL canonicalization for deduplication.
//!
//! Removes known tracking parameters from the query string. Scheme, host,
//! port, path, fragment and every other query parameter are left as the URL
//! parser serializes them, in their original order.

mod query;

use std::sync::LazyLock;

use url::Url;

use crate::denylist::Denylist;
use crate::error::InvalidUrlError;

use query::{filter_query, tracking_keys};

static BUILTIN: LazyLock<Canonicalizer> = LazyLock::new(Canonicalizer::default);

/// Strips denylisted query parameters from URLs.
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    denylist: Denylist,
}

impl Canonicalizer {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Returns `url` with every denylisted query parameter removed.
    ///
    /// The query is dropped entirely (no bare `?`) when nothing survives.
    /// The fragment is never inspected.
    ///
    /// # Examples
    ///
    /// - `https://example.com/search?q=react&utm_source=x` → `https://example.com/search?q=react`
    /// - `https://example.com/path?utm_source=x#section` → `https://example.com/path#section`
    pub fn canonicalize(&self, url: &str) -> Result<String, InvalidUrlError> {
        let mut parsed = parse(url)?;

        let filtered = match parsed.query() {
            Some(query) => filter_query(query, &self.denylist),
            None => None,
        };

        if let Some(filtered) = filtered {
            tracing::trace!(url, removed = ?filtered.removed, "stripped tracking parameters");
            parsed.set_query(filtered.query.as_deref());
        }

        Ok(parsed.into())
    }

    /// True if `url` parses and carries at least one denylisted key.
    /// Parse failures yield `false`.
    pub fn has_tracking_parameters(&self, url: &str) -> bool {
        !self.list_tracking_parameters(url).is_empty()
    }

    /// Denylisted keys of `url` in query order, duplicates included.
    /// Parse failures yield an empty list.
    pub fn list_tracking_parameters(&self, url: &str) -> Vec<String> {
        let Ok(parsed) = parse(url) else {
            return Vec::new();
        };
        parsed
            .query()
            .map(|query| tracking_keys(query, &self.denylist))
            .unwrap_or_default()
    }
}

fn parse(url: &str) -> Result<Url, InvalidUrlError> {
    Url::parse(url).map_err(|reason| {
        tracing::debug!(input = url, %reason, "URL did not parse");
        InvalidUrlError::new(url, reason)
    })
}

/// [`Canonicalizer::canonicalize`] with the built-in denylist.
pub fn canonicalize(url: &str) -> Result<String, InvalidUrlError> {
    BUILTIN.canonicalize(url)
}

/// [`Canonicalizer::has_tracking_parameters`] with the built-in denylist.
pub fn has_tracking_parameters(url: &str) -> bool {
    BUILTIN.has_tracking_parameters(url)
}

/// [`Canonicalizer::list_tracking_parameters`] with the built-in denylist.
pub fn list_tracking_parameters(url: &str) -> Vec<String> {
    BUILTIN.list_tracking_parameters(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_utm_keeps_functional_params() {
        assert_eq!(
            canonicalize("https://example.com/search?q=react&page=2&utm_source=x").unwrap(),
            "https://example.com/search?q=react&page=2"
        );
    }

    #[test]
    fn clean_url_is_unchanged() {
        assert_eq!(
            canonicalize("https://example.com/path").unwrap(),
            "https://example.com/path"
        );
        assert_eq!(
            canonicalize("https://example.com/path?q=1#top").unwrap(),
            "https://example.com/path?q=1#top"
        );
    }

    #[test]
    fn fragment_untouched() {
        assert_eq!(
            canonicalize("https://example.com/path?utm_source=x#section").unwrap(),
            "https://example.com/path#section"
        );
        assert_eq!(
            canonicalize("https://example.com/path#utm_source=x").unwrap(),
            "https://example.com/path#utm_source=x"
        );
    }

    #[test]
    fn category_is_not_stripped() {
        let url = "https://shop.example.com/list?category=books&cat=1&sources=2";
        assert_eq!(canonicalize(url).unwrap(), url);
        assert!(!has_tracking_parameters(url));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let url = "https://example.com/p?UTM_SOURCE=x&Ref=y";
        assert_eq!(canonicalize(url).unwrap(), url);
    }

    #[test]
    fn port_preserved() {
        assert_eq!(
            canonicalize("https://localhost:3000/api?utm_source=test&token=abc123").unwrap(),
            "https://localhost:3000/api?token=abc123"
        );
    }

    #[test]
    fn invalid_input_is_an_error() {
        let err = canonicalize("not-a-url").unwrap_err();
        assert_eq!(err.input, "not-a-url");
        assert_eq!(err.reason, url::ParseError::RelativeUrlWithoutBase);

        assert!(canonicalize("").is_err());
        assert!(canonicalize("https://").is_err());
        assert!(canonicalize("/relative/path?utm_source=x").is_err());
    }

    #[test]
    fn multi_param_strip_keeps_order() {
        assert_eq!(
            canonicalize(
                "https://example.com/path?utm_source=a&utm_medium=b&utm_campaign=c&fbclid=d&gclid=e&q=search&page=1"
            )
            .unwrap(),
            "https://example.com/path?q=search&page=1"
        );
    }

    #[test]
    fn only_tracking_params_drops_question_mark() {
        assert_eq!(
            canonicalize("https://example.com/a?fbclid=1&gclid=2").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn empty_query_without_tracking_is_kept() {
        assert_eq!(
            canonicalize("https://example.com/?").unwrap(),
            "https://example.com/?"
        );
        assert_eq!(
            canonicalize("https://example.com/path?&&").unwrap(),
            "https://example.com/path?&&"
        );
        assert!(!has_tracking_parameters("https://example.com/path?&&"));
        assert_eq!(
            canonicalize("https://example.com/path?&&ref=x").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn repeated_keys_survive() {
        assert_eq!(
            canonicalize("https://example.com/?tag=a&utm_term=x&tag=b").unwrap(),
            "https://example.com/?tag=a&tag=b"
        );
    }

    #[test]
    fn encoded_values_not_double_encoded() {
        assert_eq!(
            canonicalize("https://example.com/s?q=caf%C3%A9%20au%20lait&x=a%26b&ref=hn").unwrap(),
            "https://example.com/s?q=caf%C3%A9%20au%20lait&x=a%26b"
        );
    }

    #[test]
    fn idempotent() {
        for url in [
            "https://example.com/search?q=react&page=2&utm_source=x",
            "https://example.com/path?utm_source=x#section",
            "https://example.com/?a=1&&utm_medium=x&",
            "http://example.com/x?q=a+b&fbclid=1",
        ] {
            let once = canonicalize(url).unwrap();
            let twice = canonicalize(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {url}");
        }
    }

    #[test]
    fn list_and_has() {
        let url = "https://example.com/?utm_source=a&q=1&utm_source=b&gclid=c";
        assert_eq!(
            list_tracking_parameters(url),
            vec!["utm_source", "utm_source", "gclid"]
        );
        assert!(has_tracking_parameters(url));
        assert!(!has_tracking_parameters("https://example.com/?q=1"));
    }

    #[test]
    fn helpers_degrade_on_parse_failure() {
        assert!(!has_tracking_parameters("not-a-url?utm_source=x"));
        assert!(list_tracking_parameters("not-a-url?utm_source=x").is_empty());
    }

    #[test]
    fn custom_denylist() {
        let canon = Canonicalizer::new(Denylist::builtin().without(["t"]).with_extra(["session"]));
        assert_eq!(
            canon
                .canonicalize("https://example.com/v?t=42&session=abc&id=7")
                .unwrap(),
            "https://example.com/v?t=42&id=7"
        );
        assert_eq!(canon.list_tracking_parameters("https://example.com/v?t=1"), Vec::<String>::new());
    }

    #[test]
    fn canonicalizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Canonicalizer>();
    }
}
