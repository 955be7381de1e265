//! Batch deduplication keyed on the canonical URL.

use std::collections::HashMap;

use serde::Serialize;

use crate::canonical::Canonicalizer;
use crate::error::InvalidUrlError;

/// First occurrence of a canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DedupEntry {
    pub canonical: String,
    pub original: String,
}

/// A later input that collapsed onto an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub original: String,
    pub canonical: String,
    /// Original text of the first input with the same canonical form.
    pub first_seen: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    pub unique: Vec<DedupEntry>,
    pub duplicates: Vec<DuplicateEntry>,
    pub invalid: Vec<InvalidUrlError>,
}

impl Canonicalizer {
    /// Canonicalizes every input and keeps the first occurrence of each
    /// canonical URL, in input order.
    ///
    /// Invalid inputs are collected rather than aborting the batch. Blank
    /// inputs are skipped; others are passed to the parser untrimmed.
    pub fn dedupe<I, S>(&self, urls: I) -> DedupReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = DedupReport::default();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for raw in urls {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }

            let canonical = match self.canonicalize(raw) {
                Ok(c) => c,
                Err(e) => {
                    report.invalid.push(e);
                    continue;
                }
            };

            match seen.get(&canonical) {
                Some(&idx) => {
                    let first_seen = report.unique[idx].original.clone();
                    report.duplicates.push(DuplicateEntry {
                        original: raw.to_string(),
                        canonical,
                        first_seen,
                    });
                }
                None => {
                    seen.insert(canonical.clone(), report.unique.len());
                    report.unique.push(DedupEntry {
                        canonical,
                        original: raw.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            unique = report.unique.len(),
            duplicates = report.duplicates.len(),
            invalid = report.invalid.len(),
            "dedupe finished"
        );
        report
    }
}
