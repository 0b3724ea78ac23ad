//! Data Processor Module
//! Reshapes wide World Bank tables (one column per year) into long format.

use super::series::{
    Metric, TimeSeries, TimeSeriesRow, COUNTRY_CODE_COLUMN, COUNTRY_NAME_COLUMN,
};
use polars::prelude::*;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingCountryColumn(String),
}

/// Handles the wide-to-long transformation (melt).
pub struct DataProcessor;

impl DataProcessor {
    /// Year-labelled columns within `[min_year, max_year]`, in ascending year order.
    ///
    /// Labels that do not parse as an integer are ignored.
    pub fn year_columns(df: &DataFrame, min_year: i32, max_year: i32) -> Vec<(i32, String)> {
        let mut columns: Vec<(i32, String)> = df
            .get_columns()
            .iter()
            .filter_map(|col| {
                let name = col.name().as_str();
                let year = name.trim().parse::<i32>().ok()?;
                (min_year..=max_year)
                    .contains(&year)
                    .then(|| (year, name.to_string()))
            })
            .collect();
        columns.sort_by_key(|(year, _)| *year);
        columns
    }

    /// Melt a wide table into a long-format series.
    ///
    /// Output has one row per (country, in-range year column). Blank cells become
    /// rows with `value: None`.
    pub fn melt_years(
        df: &DataFrame,
        metric: Metric,
        min_year: i32,
        max_year: i32,
    ) -> Result<TimeSeries, ReshapeError> {
        let name_col = df
            .column(COUNTRY_NAME_COLUMN)
            .map_err(|_| ReshapeError::MissingCountryColumn(COUNTRY_NAME_COLUMN.to_string()))?
            .cast(&DataType::String)?;
        let names = name_col.str()?;

        let code_col = match df.column(COUNTRY_CODE_COLUMN) {
            Ok(col) => Some(col.cast(&DataType::String)?),
            Err(_) => None,
        };
        let codes = code_col.as_ref().map(|c| c.str()).transpose()?;

        // Source row indices carrying a usable country name
        let mut seen = HashSet::new();
        let mut kept: Vec<usize> = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            match names.get(i).map(str::trim) {
                Some(name) if !name.is_empty() => {
                    // Kept; growth lookups report the duplicate per country
                    if !seen.insert(name) {
                        warn!(country = name, metric = metric.label(), "duplicate country row");
                    }
                    kept.push(i);
                }
                _ => warn!(row = i, metric = metric.label(), "skipping row without country name"),
            }
        }

        let year_cols = Self::year_columns(df, min_year, max_year);
        debug!(
            metric = metric.label(),
            columns = year_cols.len(),
            "melting year columns {}..={}",
            min_year,
            max_year
        );

        let mut rows: Vec<TimeSeriesRow> = Vec::with_capacity(kept.len() * year_cols.len());
        for (year, col_name) in &year_cols {
            // Non-strict cast: unreadable cells become null
            let value_f64 = df.column(col_name)?.cast(&DataType::Float64)?;
            let value_ca = value_f64.f64()?;

            for &i in &kept {
                let Some(name) = names.get(i) else {
                    continue;
                };
                rows.push(TimeSeriesRow {
                    country_name: name.trim().to_string(),
                    country_code: codes
                        .and_then(|c| c.get(i))
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty()),
                    year: *year,
                    value: value_ca.get(i).filter(|v| !v.is_nan()),
                });
            }
        }

        info!(
            metric = metric.label(),
            countries = kept.len(),
            rows = rows.len(),
            "reshaped wide table"
        );

        Ok(TimeSeries::new(metric, rows))
    }
}
