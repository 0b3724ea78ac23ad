//! Country Data Explorer - GDP & Population Dashboard
//!
//! Reshapes World Bank wide-format CSV files and shows per-country growth.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, DashboardConfig};
use data::CountryDataset;
use eframe::egui;
use gui::CountryDashboardApp;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let config = DashboardConfig::resolve(&cli).context("loading configuration")?;
    match config.to_json() {
        Ok(json) => debug!(config = %json, "resolved configuration"),
        Err(e) => debug!(error = %e, "could not serialize configuration"),
    }

    // Data never changes while running; load once and hand it to the app
    let dataset = CountryDataset::load(&config).context("loading country data")?;
    info!(
        countries = dataset.countries().len(),
        gdp_rows = dataset.gdp.len(),
        population = dataset.population.is_some(),
        "dataset ready"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Country Data"),
        ..Default::default()
    };

    eframe::run_native(
        "Country Data",
        options,
        Box::new(move |cc| Ok(Box::new(CountryDashboardApp::new(cc, dataset, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start window: {e}"))
}
