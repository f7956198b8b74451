//! CSV input: one observed phishing URL per row.
//!
//! Only the `url` column is required. `first_seen`, `timestamp` and `date`
//! are parsed leniently to UTC; `source` is kept as text.

mod timestamp;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub use timestamp::parse_timestamp;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Input CSV must contain a 'url' column.")]
    MissingUrlColumn,
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: String,
    /// Drives the report's time range and daily volume.
    pub first_seen: Option<DateTime<Utc>>,
    /// Coerced like `first_seen`; not read by the report, kept for library callers.
    pub timestamp: Option<DateTime<Utc>>,
    /// Coerced like `first_seen`; not read by the report, kept for library callers.
    pub date: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

/// Which optional columns the input header carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub first_seen: bool,
    pub timestamp: bool,
    pub date: bool,
    pub source: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<UrlRecord>,
    pub columns: Columns,
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    url: usize,
    first_seen: Option<usize>,
    timestamp: Option<usize>,
    date: Option<usize>,
    source: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Ok(Self {
            url: find("url").ok_or(DatasetError::MissingUrlColumn)?,
            first_seen: find("first_seen"),
            timestamp: find("timestamp"),
            date: find("date"),
            source: find("source"),
        })
    }

    fn columns(&self) -> Columns {
        Columns {
            first_seen: self.first_seen.is_some(),
            timestamp: self.timestamp.is_some(),
            date: self.date.is_some(),
            source: self.source.is_some(),
        }
    }

    fn record(&self, row: &StringRecord) -> UrlRecord {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));
        let instant = |idx: Option<usize>| cell(idx).and_then(parse_timestamp);
        UrlRecord {
            url: row.get(self.url).unwrap_or_default().to_string(),
            first_seen: instant(self.first_seen),
            timestamp: instant(self.timestamp),
            date: instant(self.date),
            source: cell(self.source)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

/// Reads all rows from CSV `input` (header row required).
pub fn read_dataset<R: Read>(input: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);
    let index = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(index.record(&row?));
    }

    Ok(Dataset {
        records,
        columns: index.columns(),
    })
}

/// Loads the dataset at `path`.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file =
        std::fs::File::open(path).with_context(|| format!("open input CSV {}", path.display()))?;
    let dataset =
        read_dataset(file).with_context(|| format!("read input CSV {}", path.display()))?;
    tracing::info!(rows = dataset.records.len(), "loaded {}", path.display());
    Ok(dataset)
}
