use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{DomainClassifier, SuffixSet};

/// Chart canvas size (optional section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// Global configuration loaded from `~/.config/phishstat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishstatConfig {
    /// Rows per frequency table and bars per chart.
    pub top_n: usize,
    /// Directory receiving charts and the report.
    pub out_dir: PathBuf,
    /// Trailing days shown in the daily volume table.
    pub daily_volume_days: usize,
    /// Two-level suffixes added to the built-in set, e.g. `["co.in"]`.
    #[serde(default)]
    pub extra_two_level_suffixes: Vec<String>,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for PhishstatConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            out_dir: PathBuf::from("reports"),
            daily_volume_days: 30,
            extra_two_level_suffixes: Vec::new(),
            chart: ChartConfig::default(),
        }
    }
}

impl PhishstatConfig {
    /// Built-in suffixes plus `extra_two_level_suffixes`.
    pub fn suffix_set(&self) -> Result<SuffixSet> {
        let mut set = SuffixSet::default();
        for suffix in &self.extra_two_level_suffixes {
            set.insert(suffix)
                .context("invalid entry in extra_two_level_suffixes")?;
        }
        Ok(set)
    }

    pub fn classifier(&self) -> Result<DomainClassifier> {
        Ok(DomainClassifier::new(self.suffix_set()?))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishstat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishstatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishstatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<PhishstatConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PhishstatConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
