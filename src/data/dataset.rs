//! Load-once dataset handed to the UI.

use super::loader::{DataLoader, LoaderError};
use super::series::{Metric, TimeSeries, MAX_YEAR, MIN_YEAR};
use crate::config::DashboardConfig;
use tracing::warn;

/// GDP series plus an optional population series (absent in the GDP-only variant).
#[derive(Debug, Clone)]
pub struct CountryDataset {
    pub gdp: TimeSeries,
    pub population: Option<TimeSeries>,
}

impl CountryDataset {
    /// Read and reshape every data file named by `config`.
    pub fn load(config: &DashboardConfig) -> Result<Self, LoaderError> {
        let gdp = DataLoader::load_series(
            &config.gdp_path(),
            Metric::Gdp,
            config.skip_rows,
            MIN_YEAR,
            MAX_YEAR,
        )?;
        if gdp.is_empty() {
            warn!("GDP table has no rows between {} and {}", MIN_YEAR, MAX_YEAR);
        }

        let population = config
            .population_path()
            .map(|path| {
                DataLoader::load_series(
                    &path,
                    Metric::Population,
                    config.skip_rows,
                    MIN_YEAR,
                    MAX_YEAR,
                )
            })
            .transpose()?;

        Ok(Self { gdp, population })
    }

    /// Countries offered in the selector, taken from the GDP table.
    pub fn countries(&self) -> Vec<String> {
        self.gdp.countries()
    }

    /// Year slider bounds, falling back to the reshaped range when the table is empty.
    pub fn year_bounds(&self) -> (i32, i32) {
        self.gdp.year_bounds().unwrap_or((MIN_YEAR, MAX_YEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_and_reduced_variants() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("gdp_data.csv"),
            "Country Name,Country Code,2002,2010\nJapan,JPN,4000000000000,5700000000000\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("population_data.csv"),
            "Country Name,Country Code,2002,2010\nJapan,JPN,127000000,128000000\n",
        )
        .unwrap();

        let mut config = DashboardConfig {
            data_dir: dir.path().to_path_buf(),
            ..DashboardConfig::default()
        };

        let full = CountryDataset::load(&config).unwrap();
        assert_eq!(full.countries(), vec!["Japan"]);
        assert_eq!(full.year_bounds(), (2002, 2010));
        assert_eq!(full.population.as_ref().map(|p| p.len()), Some(2));

        config.population_file = None;
        let reduced = CountryDataset::load(&config).unwrap();
        assert!(reduced.population.is_none());
    }

    #[test]
    fn test_missing_population_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("gdp_data.csv"),
            "Country Name,2002\nJapan,1\n",
        )
        .unwrap();

        let config = DashboardConfig {
            data_dir: dir.path().to_path_buf(),
            ..DashboardConfig::default()
        };

        assert!(matches!(
            CountryDataset::load(&config),
            Err(LoaderError::MissingFile(_))
        ));
    }
}
