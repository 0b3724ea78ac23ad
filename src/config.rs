//! Dashboard configuration: defaults, optional JSON file, command-line overrides.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_COUNTRIES: [&str; 5] = [
    "China",
    "India",
    "United Kingdom",
    "United States",
    "Japan",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "country_data_explorer", version, about = "Country GDP & Population Dashboard")]
pub struct Cli {
    /// JSON config file; command-line flags take precedence over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the data files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// GDP file name, relative to the data directory
    #[arg(long)]
    pub gdp: Option<String>,

    /// Population file name, relative to the data directory
    #[arg(long, conflicts_with = "gdp_only")]
    pub population: Option<String>,

    /// Show GDP only (no population file)
    #[arg(long)]
    pub gdp_only: bool,

    /// Background image painted behind the charts
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Metadata lines to skip before the CSV header
    #[arg(long)]
    pub skip_rows: Option<usize>,

    /// Country selected at startup (repeatable)
    #[arg(long = "country")]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub gdp_file: String,
    /// `None` selects the GDP-only variant.
    pub population_file: Option<String>,
    pub background_image: Option<PathBuf>,
    pub skip_rows: usize,
    pub default_countries: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            gdp_file: "gdp_data.csv".to_string(),
            population_file: Some("population_data.csv".to_string()),
            background_image: None,
            skip_rows: 0,
            default_countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective configuration: defaults, then the config file, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(gdp) = &cli.gdp {
            self.gdp_file = gdp.clone();
        }
        if cli.gdp_only {
            self.population_file = None;
        } else if let Some(population) = &cli.population {
            self.population_file = Some(population.clone());
        }
        if let Some(background) = &cli.background {
            self.background_image = Some(background.clone());
        }
        if let Some(skip_rows) = cli.skip_rows {
            self.skip_rows = skip_rows;
        }
        if !cli.countries.is_empty() {
            self.default_countries = cli.countries.clone();
        }
        self
    }

    /// The effective configuration as JSON, loadable again through `--config`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn gdp_path(&self) -> PathBuf {
        self.data_dir.join(&self.gdp_file)
    }

    pub fn population_path(&self) -> Option<PathBuf> {
        self.population_file.as_ref().map(|f| self.data_dir.join(f))
    }
}
