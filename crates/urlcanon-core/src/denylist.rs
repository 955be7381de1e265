//! Tracking-parameter denylist.
//!
//! An ordered, deduplicated set of query keys that carry referrer, campaign or
//! click-id information and no meaning for the linked resource. Matching is
//! exact and case-sensitive.

use std::collections::HashSet;

/// Built-in tracking parameter names, in their canonical order.
pub const BUILTIN_PARAMS: &[&str] = &[
    // Google Analytics / Ads
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "gclid",
    "gclsrc",
    "dclid",
    "wbraid",
    "gbraid",
    // Facebook / Instagram
    "fbclid",
    "fb_action_ids",
    "fb_action_types",
    "fb_ref",
    "fb_source",
    "igshid",
    "igsh",
    // Twitter / X
    "ref_src",
    "ref_url",
    "s",
    "t",
    // LinkedIn
    "trk",
    "trkCampaign",
    "li_fat_id",
    // Email platforms
    "mc_cid",
    "mc_eid",
    "ck_subscriber_id",
    "campaign_id",
    "tracking_id",
    "email_id",
    "subscriber_id",
    // Generic referrers
    "ref",
    "source",
    "medium",
    "campaign",
    // HubSpot, Vero, misc
    "_hsenc",
    "_hsmi",
    "hsCtaTracking",
    "vero_conv",
    "vero_id",
    "wickedid",
    "yclid",
    "msclkid",
    "epik",
    "pp",
    "_branch_match_id",
    // Alibaba / Taobao
    "spm",
    "scm",
    "share_from",
    // Cache busters
    "checksum",
    "timestamp",
    "hash",
];

/// Ordered set of parameter names stripped during canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    names: Vec<String>,
    index: HashSet<String>,
}

impl Denylist {
    /// Builds a denylist from `names`, keeping the first occurrence of each
    /// name and dropping empty ones.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            names: Vec::new(),
            index: HashSet::new(),
        };
        list.extend(names);
        list
    }

    /// The built-in list ([`BUILTIN_PARAMS`]).
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PARAMS.iter().copied())
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Returns a copy with `names` appended (names already present keep their position).
    pub fn with_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(names);
        self
    }

    /// Returns a copy without the given names.
    pub fn without<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.index.remove(name) {
                self.names.retain(|n| n != name);
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if name.is_empty() || self.index.contains(&name) {
                continue;
            }
            self.index.insert(name.clone());
            self.names.push(name);
        }
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}
