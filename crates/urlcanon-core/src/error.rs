//! Error type for canonicalization.

use serde::{Serialize, Serializer};

/// The input could not be parsed as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid URL {input:?}: {reason}")]
pub struct InvalidUrlError {
    /// The string passed by the caller, untouched.
    pub input: String,
    #[source]
    pub reason: url::ParseError,
}

impl InvalidUrlError {
    pub(crate) fn new(input: &str, reason: url::ParseError) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

// url::ParseError has no serde impl; reports carry its message instead.
impl Serialize for InvalidUrlError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("InvalidUrlError", 2)?;
        s.serialize_field("input", &self.input)?;
        s.serialize_field("reason", &self.reason.to_string())?;
        s.end()
    }
}
