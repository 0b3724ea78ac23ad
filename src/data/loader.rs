//! CSV Data Loader Module
//! Reads wide-format World Bank CSV files using Polars.

use super::processor::{DataProcessor, ReshapeError};
use super::series::{Metric, TimeSeries};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data file not found: {0}")]
    MissingFile(PathBuf),
    #[error("Failed to load CSV {path}: {source}")]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Failed to reshape {path}: {source}")]
    Reshape {
        path: PathBuf,
        #[source]
        source: ReshapeError,
    },
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file into a wide DataFrame.
    ///
    /// `skip_rows` drops leading metadata lines before the header, as found in raw
    /// World Bank downloads.
    pub fn load_csv(file_path: &Path, skip_rows: usize) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::MissingFile(file_path.to_path_buf()));
        }

        let csv_error = |source| LoaderError::CsvError {
            path: file_path.to_path_buf(),
            source,
        };

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_skip_rows(skip_rows)
            .with_infer_schema_length(Some(10000))
            .finish()
            .map_err(csv_error)?
            .collect()
            .map_err(csv_error)?;

        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );

        Ok(df)
    }

    /// Load and melt one metric file.
    pub fn load_series(
        file_path: &Path,
        metric: Metric,
        skip_rows: usize,
        min_year: i32,
        max_year: i32,
    ) -> Result<TimeSeries, LoaderError> {
        let df = Self::load_csv(file_path, skip_rows)?;
        DataProcessor::melt_years(&df, metric, min_year, max_year).map_err(|source| {
            LoaderError::Reshape {
                path: file_path.to_path_buf(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_series_from_csv() {
        let file = write_csv(
            "Country Name,Country Code,2001,2002,2022\n\
             Japan,JPN,3900000000000,4000000000000,4300000000000\n\
             India,IND,490000000000,,3400000000000\n",
        );

        let series = DataLoader::load_series(file.path(), Metric::Gdp, 0, 2002, 2022).unwrap();

        assert_eq!(series.len(), 4);
        assert_eq!(series.countries(), vec!["Japan", "India"]);
        let india_2002 = series
            .rows()
            .iter()
            .find(|r| r.country_name == "India" && r.year == 2002)
            .unwrap();
        assert_eq!(india_2002.value, None);
    }

    #[test]
    fn test_load_csv_skips_metadata_lines() {
        let file = write_csv(
            "Data Source,World Development Indicators\n\
             Last Updated Date,2023-12-18\n\
             Country Name,Country Code,2002\n\
             Japan,JPN,127000000\n",
        );

        let df = DataLoader::load_csv(file.path(), 2).unwrap();
        assert_eq!(df.height(), 1);
        assert!(df.column("Country Name").is_ok());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = DataLoader::load_csv(Path::new("/nonexistent/gdp_data.csv"), 0).unwrap_err();
        assert!(matches!(err, LoaderError::MissingFile(_)));
    }

    #[test]
    fn test_reshape_error_carries_path() {
        let file = write_csv("Name,2002\nJapan,1\n");
        let err = DataLoader::load_series(file.path(), Metric::Gdp, 0, 2002, 2022).unwrap_err();
        assert!(matches!(err, LoaderError::Reshape { .. }));
    }
}
