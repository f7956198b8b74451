//! The canonical host newtype.

use std::fmt;
use std::ops::Deref;

/// Lowercase, credential- and port-free hostname, plain ASCII or Punycode.
///
/// Only the host extractor constructs values of this type, so holding one
/// means the string is non-empty and matches `[a-z0-9-.]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalHost(String);

impl CanonicalHost {
    /// Caller must have checked the host syntax.
    pub(super) fn new_unchecked(host: String) -> Self {
        Self(host)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for CanonicalHost {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CanonicalHost {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalHost {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
