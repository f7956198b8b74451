//! Derive host columns, drop unusable rows, deduplicate by URL.

use std::collections::{BTreeMap, HashSet};

use crate::dataset::{Columns, Dataset, UrlRecord};
use crate::domain::DomainClassifier;
use crate::host::{classify_host, CanonicalHost};

/// A row that yielded a canonical host, with its derived features.
#[derive(Debug, Clone)]
pub struct DerivedRecord {
    pub record: UrlRecord,
    pub host: CanonicalHost,
    pub root_domain: String,
    pub tld: Option<String>,
}

/// Cleaned working set plus bookkeeping for logs and the report.
#[derive(Debug, Clone, Default)]
pub struct PreparedDataset {
    pub records: Vec<DerivedRecord>,
    pub columns: Columns,
    /// Rows read from the input.
    pub loaded: usize,
    /// Rows dropped for lacking a canonical host, keyed by rejection kind.
    pub rejected: BTreeMap<&'static str, usize>,
    /// Rows removed as exact `url` duplicates.
    pub duplicates: usize,
}

impl PreparedDataset {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Runs the cleaning stage over `dataset`.
///
/// Rows without a host are dropped first, then later rows repeating an
/// earlier `url` string are dropped; the first occurrence wins.
pub fn prepare(dataset: Dataset, classifier: &DomainClassifier) -> PreparedDataset {
    let loaded = dataset.records.len();
    let mut rejected: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut derived = Vec::with_capacity(loaded);

    for record in dataset.records {
        match classify_host(&record.url) {
            Ok(host) => {
                let features = classifier.classify(&host);
                derived.push(DerivedRecord {
                    record,
                    host,
                    root_domain: features.root_domain,
                    tld: features.tld,
                });
            }
            Err(reason) => {
                tracing::debug!(url = %record.url, "dropped: {}", reason);
                *rejected.entry(reason.kind()).or_default() += 1;
            }
        }
    }

    for (kind, count) in &rejected {
        tracing::info!(kind = *kind, count = *count, "rows without a canonical host");
    }

    let before = derived.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);
    derived.retain(|r| seen.insert(r.record.url.clone()));
    tracing::info!("Deduplicated URLs: {} -> {}", before, derived.len());

    PreparedDataset {
        duplicates: before - derived.len(),
        records: derived,
        columns: dataset.columns,
        loaded,
        rejected,
    }
}
