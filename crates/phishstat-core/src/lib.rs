//! phishstat core: canonical hosts and root domains for phishing URL feeds.
//!
//! [`host`] and [`domain`] are pure and safe to call from any thread; the
//! remaining modules form the batch pipeline around them.

pub mod config;
pub mod logging;

pub mod analysis;
pub mod chart;
pub mod dataset;
pub mod domain;
pub mod host;
pub mod prepare;
pub mod report;
pub mod stats;

pub use domain::{root_domain, top_level_domain, DomainClassifier, SuffixSet};
pub use host::{classify_host, extract_canonical_host, CanonicalHost, HostRejection};
