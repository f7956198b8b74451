//! `phishstat analyze` – run the batch pipeline on a CSV feed.

use anyhow::Result;
use phishstat_core::analysis::{self, AnalysisOptions};
use phishstat_core::config::{self, PhishstatConfig};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub input: PathBuf,
    pub out: Option<PathBuf>,
    pub topn: Option<usize>,
    pub config: Option<PathBuf>,
}

/// Applies command-line overrides on top of the loaded config.
fn resolve_options(cfg: &PhishstatConfig, args: &AnalyzeArgs) -> Result<AnalysisOptions> {
    let mut opts = AnalysisOptions::from_config(cfg)?;
    if let Some(out) = &args.out {
        opts.out_dir = out.clone();
    }
    if let Some(topn) = args.topn {
        opts.top_n = topn;
    }
    Ok(opts)
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);

    let opts = resolve_options(&cfg, args)?;
    let artifacts = analysis::run(&args.input, &opts)?;

    println!("Analysis complete. Artifacts:");
    for path in artifacts.paths() {
        println!("- {}", path.display());
    }
    Ok(())
}
