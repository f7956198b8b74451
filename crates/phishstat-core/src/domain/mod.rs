//! Domain classification: root domain and top-level domain of a host.
//!
//! The root domain rule is a static lookup, not a public suffix list:
//! a host keeps its last three labels when its last two form a known
//! two-level suffix, and its last two labels otherwise. Hosts under
//! unlisted two-level suffixes are misclassified on purpose, e.g.
//! `x.example.co.in` → `co.in`, so results stay reproducible. Extend the
//! [`SuffixSet`] explicitly to change that.

mod suffix;

pub use suffix::{InvalidSuffix, SuffixSet, KNOWN_TWO_LEVEL_SUFFIXES};

use crate::host::CanonicalHost;

/// Root domain and TLD derived from one canonical host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFeatures {
    pub root_domain: String,
    pub tld: Option<String>,
}

/// Splits hosts using an injected two-level suffix set.
#[derive(Debug, Clone, Default)]
pub struct DomainClassifier {
    suffixes: SuffixSet,
}

impl DomainClassifier {
    pub fn new(suffixes: SuffixSet) -> Self {
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &SuffixSet {
        &self.suffixes
    }

    /// Registrable root domain of `host`; `None` only for an empty host.
    ///
    /// # Examples
    ///
    /// - `"a.b.co.uk"` → `"b.co.uk"`
    /// - `"a.b.com"` → `"b.com"`
    /// - `"localhost"` → `"localhost"`
    pub fn root_domain(&self, host: &str) -> Option<String> {
        if host.is_empty() {
            return None;
        }
        let labels: Vec<&str> = host.split('.').collect();
        let n = labels.len();
        if n <= 2 {
            return Some(host.to_string());
        }
        let keep = if self.suffixes.contains(labels[n - 2], labels[n - 1]) {
            3
        } else {
            2
        };
        Some(labels[n - keep..].join("."))
    }

    pub fn classify(&self, host: &CanonicalHost) -> DomainFeatures {
        DomainFeatures {
            root_domain: self
                .root_domain(host.as_str())
                .unwrap_or_else(|| host.to_string()),
            tld: top_level_domain(host.as_str()),
        }
    }
}

/// [`DomainClassifier::root_domain`] with the default suffix set.
pub fn root_domain(host: &str) -> Option<String> {
    DomainClassifier::default().root_domain(host)
}

/// Final label of `host`; `None` when the host is empty or has no dot.
pub fn top_level_domain(host: &str) -> Option<String> {
    host.rsplit_once('.').map(|(_, tld)| tld.to_string())
}
