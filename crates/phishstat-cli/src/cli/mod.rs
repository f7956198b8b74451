//! CLI for the phishstat phishing URL analyzer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_analyze, run_completions, run_inspect, AnalyzeArgs};

/// Top-level CLI for phishstat.
#[derive(Debug, Parser)]
#[command(name = "phishstat")]
#[command(about = "Analyze phishing URL feeds: canonical hosts, root domains, charts and a Markdown report", long_about = None)]
pub struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze a phishing URL CSV and write charts plus a Markdown report.
    Analyze {
        /// Path to the input CSV (must have a `url` column).
        #[arg(short, long, value_name = "CSV")]
        input: PathBuf,

        /// Output directory (default: `out_dir` from config, else `reports`).
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Rows per table and bars per chart (default: `top_n` from config, else 10).
        #[arg(long, value_name = "N")]
        topn: Option<usize>,

        /// Read configuration from this file instead of the XDG config dir.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show the canonical host, root domain and TLD of one or more URLs.
    Inspect {
        /// Raw URLs, with or without scheme.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print one JSON object per URL.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Analyze {
                input,
                out,
                topn,
                config,
            } => run_analyze(&AnalyzeArgs {
                input,
                out,
                topn,
                config,
            })?,
            CliCommand::Inspect { urls, json } => run_inspect(&urls, json)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
