//! Tracking-parameter URL canonicalization.
//!
//! [`canonicalize`] turns a raw URL into a stable deduplication key by removing
//! referrer, campaign and click-id query parameters listed in a [`Denylist`].

pub mod config;
pub mod logging;

pub mod canonical;
pub mod dedup;
pub mod denylist;
pub mod error;

pub use canonical::{canonicalize, has_tracking_parameters, list_tracking_parameters, Canonicalizer};
pub use dedup::{DedupEntry, DedupReport, DuplicateEntry};
pub use denylist::{Denylist, BUILTIN_PARAMS};
pub use error::InvalidUrlError;
