//! End-to-end batch run: load, clean, chart, report.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::chart::{self, BarChart};
use crate::config::{ChartConfig, PhishstatConfig};
use crate::dataset;
use crate::domain::DomainClassifier;
use crate::prepare::{self, PreparedDataset};
use crate::report::{self, ChartPaths, ReportOptions};
use crate::stats;

pub const ROOT_DOMAIN_CHART: &str = "top10_root_domains.svg";
pub const TLD_CHART: &str = "top10_tld.svg";

/// Everything one run needs besides the input path.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub out_dir: PathBuf,
    pub top_n: usize,
    pub daily_volume_days: usize,
    pub chart: ChartConfig,
    pub classifier: DomainClassifier,
}

impl AnalysisOptions {
    pub fn from_config(cfg: &PhishstatConfig) -> Result<Self> {
        Ok(Self {
            out_dir: cfg.out_dir.clone(),
            top_n: cfg.top_n,
            daily_volume_days: cfg.daily_volume_days,
            chart: cfg.chart,
            classifier: cfg.classifier()?,
        })
    }
}

/// Files written by a run, plus the cleaned data for callers that want it.
#[derive(Debug, Clone)]
pub struct AnalysisArtifacts {
    pub charts: ChartPaths,
    pub report: PathBuf,
    pub data: PreparedDataset,
}

impl AnalysisArtifacts {
    /// Produced files in the order they are announced to the user.
    pub fn paths(&self) -> Vec<&Path> {
        [self.charts.root_domains.as_deref(), self.charts.tlds.as_deref()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.report.as_path()))
            .collect()
    }
}

/// Renders both frequency charts into `out_dir`.
pub fn render_charts(data: &PreparedDataset, opts: &AnalysisOptions) -> Result<ChartPaths> {
    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("create output dir {}", opts.out_dir.display()))?;

    let root_title = format!("Top {} Root Domains (Phishing)", opts.top_n);
    let tld_title = format!("Top {} TLDs (Phishing)", opts.top_n);

    let top_root = stats::value_counts(
        data.records.iter().map(|r| r.root_domain.as_str()),
        opts.top_n,
    );
    let root_domains = chart::render_bar_chart(
        &top_root,
        &BarChart {
            title: &root_title,
            x_label: "Root Domain",
        },
        &opts.chart,
        &opts.out_dir.join(ROOT_DOMAIN_CHART),
    )?;

    let top_tld = stats::value_counts(
        data.records.iter().filter_map(|r| r.tld.as_deref()),
        opts.top_n,
    );
    let tlds = chart::render_bar_chart(
        &top_tld,
        &BarChart {
            title: &tld_title,
            x_label: "TLD",
        },
        &opts.chart,
        &opts.out_dir.join(TLD_CHART),
    )?;

    Ok(ChartPaths { root_domains, tlds })
}

/// Runs the whole pipeline on the CSV at `input`.
pub fn run(input: &Path, opts: &AnalysisOptions) -> Result<AnalysisArtifacts> {
    let raw = dataset::load_csv(input)?;
    let data = prepare::prepare(raw, &opts.classifier);
    tracing::info!(
        loaded = data.loaded,
        dropped = data.rejected_total(),
        duplicates = data.duplicates,
        kept = data.records.len(),
        "cleaned dataset"
    );

    let charts = render_charts(&data, opts)?;
    let report = report::write_report(
        &opts.out_dir,
        &data,
        &charts,
        &ReportOptions {
            top_n: opts.top_n,
            daily_volume_days: opts.daily_volume_days,
        },
    )?;

    Ok(AnalysisArtifacts {
        charts,
        report,
        data,
    })
}
