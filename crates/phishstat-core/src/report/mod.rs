//! Markdown report assembly.

mod table;

pub use table::markdown_table;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::prepare::PreparedDataset;
use crate::stats;

pub const REPORT_FILE: &str = "report.md";

/// Chart files produced for the report; `None` when a chart was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartPaths {
    pub root_domains: Option<PathBuf>,
    pub tlds: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub top_n: usize,
    pub daily_volume_days: usize,
}

fn format_instant(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

/// Image link by file name, so the report stays valid next to its charts.
fn image_link(alt: &str, path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("![{alt}]({name})")
}

/// Renders the report body.
pub fn render_report(data: &PreparedDataset, charts: &ChartPaths, opts: &ReportOptions) -> String {
    let top_n = opts.top_n;
    let first_seen = || data.records.iter().filter_map(|r| r.record.first_seen);

    let mut md = String::new();
    md.push_str("# Phishing URL Analysis Report\n\n");
    let _ = writeln!(md, "- Total URLs Collected: **{}**", data.records.len());
    if data.columns.first_seen {
        let range = match stats::time_range(first_seen()) {
            Some((first, last)) => format!("{} → {}", format_instant(&first), format_instant(&last)),
            None => "n/a → n/a".to_string(),
        };
        let _ = writeln!(md, "- Time range (first_seen): **{range}**");
    }

    let top_root = stats::value_counts(data.records.iter().map(|r| r.root_domain.as_str()), top_n);
    let _ = write!(md, "\n## Top {top_n} Root Domains\n\n");
    md.push_str(&markdown_table("root_domain", &top_root));
    if let Some(path) = &charts.root_domains {
        let _ = writeln!(md, "\n{}", image_link("Top Root Domains", path));
    }

    let top_tld = stats::value_counts(data.records.iter().filter_map(|r| r.tld.as_deref()), top_n);
    let _ = write!(md, "\n## Top {top_n} TLDs\n\n");
    md.push_str(&markdown_table("tld", &top_tld));
    if let Some(path) = &charts.tlds {
        let _ = writeln!(md, "\n{}", image_link("Top TLDs", path));
    }

    if data.columns.source {
        let by_source = stats::value_counts(
            data.records.iter().filter_map(|r| r.record.source.as_deref()),
            top_n,
        );
        let _ = write!(md, "\n## By Source (Top {top_n})\n\n");
        md.push_str(&markdown_table("source", &by_source));
    }

    if data.columns.first_seen {
        let by_day = stats::daily_volume(first_seen(), opts.daily_volume_days);
        md.push_str("\n## Daily Volume (first_seen)\n\n");
        md.push_str(&markdown_table("first_seen", &by_day));
    }

    md
}

/// Writes `report.md` into `out_dir` and returns its path.
pub fn write_report(
    out_dir: &Path,
    data: &PreparedDataset,
    charts: &ChartPaths,
    opts: &ReportOptions,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;
    let path = out_dir.join(REPORT_FILE);
    fs::write(&path, render_report(data, charts, opts))
        .with_context(|| format!("write report {}", path.display()))?;
    tracing::info!("report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests;
