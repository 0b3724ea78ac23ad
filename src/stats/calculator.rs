//! Growth Calculator Module
//! Filters long-format series and computes start/end growth per country.

use crate::data::{TimeSeries, TimeSeriesRow};
use thiserror::Error;
use tracing::warn;

/// How growth between two values is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthKind {
    /// `end - start`, in display units
    #[default]
    Absolute,
    /// `(end - start) / start * 100`
    Percent,
    /// `end / start`
    Ratio,
}

/// Growth outcome; `NotApplicable` when a value is absent or the baseline is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Growth {
    Value(f64),
    NotApplicable,
}

impl Growth {
    pub fn value(&self) -> Option<f64> {
        match self {
            Growth::Value(v) => Some(*v),
            Growth::NotApplicable => None,
        }
    }
}

/// Data-integrity fault: the series should hold exactly one row per (country, year).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("No {year} row for {country}")]
    MissingRow { country: String, year: i32 },
    #[error("{count} rows for {country} in {year}")]
    DuplicateRow {
        country: String,
        year: i32,
        count: usize,
    },
}

/// Summary card data for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryGrowth {
    pub country: String,
    /// Value at the end of the range, in display units
    pub last_value: Option<f64>,
    pub growth: Growth,
    pub kind: GrowthKind,
}

/// Filtering and growth computation over long-format series.
pub struct GrowthCalculator;

impl GrowthCalculator {
    /// Rows whose country is selected and whose year is in `[from_year, to_year]`.
    ///
    /// Empty when nothing is selected or `from_year > to_year`.
    pub fn filter(
        series: &TimeSeries,
        selected: &[String],
        from_year: i32,
        to_year: i32,
    ) -> TimeSeries {
        let rows = series
            .rows()
            .iter()
            .filter(|r| (from_year..=to_year).contains(&r.year))
            .filter(|r| selected.iter().any(|s| *s == r.country_name))
            .cloned()
            .collect();
        TimeSeries::new(series.metric(), rows)
    }

    /// The single row for `(country, year)`.
    pub fn lookup<'a>(
        series: &'a TimeSeries,
        country: &str,
        year: i32,
    ) -> Result<&'a TimeSeriesRow, LookupError> {
        let mut matches = series
            .rows()
            .iter()
            .filter(|r| r.year == year && r.country_name == country);

        match (matches.next(), matches.count()) {
            (Some(row), 0) => Ok(row),
            (Some(_), extra) => Err(LookupError::DuplicateRow {
                country: country.to_string(),
                year,
                count: extra + 1,
            }),
            (None, _) => Err(LookupError::MissingRow {
                country: country.to_string(),
                year,
            }),
        }
    }

    /// Growth between two display-scaled values.
    pub fn compute_growth(start: Option<f64>, end: Option<f64>, kind: GrowthKind) -> Growth {
        let (Some(start), Some(end)) = (start, end) else {
            return Growth::NotApplicable;
        };
        if !start.is_finite() || !end.is_finite() {
            return Growth::NotApplicable;
        }

        let value = match kind {
            GrowthKind::Absolute => end - start,
            GrowthKind::Percent if start == 0.0 => return Growth::NotApplicable,
            GrowthKind::Percent => (end - start) / start * 100.0,
            GrowthKind::Ratio if start == 0.0 => return Growth::NotApplicable,
            GrowthKind::Ratio => end / start,
        };
        Growth::Value(value)
    }

    /// Growth of one country between `from_year` and `to_year`.
    pub fn country_growth(
        series: &TimeSeries,
        country: &str,
        from_year: i32,
        to_year: i32,
        kind: GrowthKind,
    ) -> Result<CountryGrowth, LookupError> {
        let scale = series.metric().display_scale();
        let first = Self::lookup(series, country, from_year)?.value.map(|v| v / scale);
        let last = Self::lookup(series, country, to_year)?.value.map(|v| v / scale);

        Ok(CountryGrowth {
            country: country.to_string(),
            last_value: last,
            growth: Self::compute_growth(first, last, kind),
            kind,
        })
    }

    /// Growth for every selected country, in selection order.
    ///
    /// Lookup faults stay attached to their country.
    pub fn summarize(
        series: &TimeSeries,
        selected: &[String],
        from_year: i32,
        to_year: i32,
        kind: GrowthKind,
    ) -> Vec<(String, Result<CountryGrowth, LookupError>)> {
        selected
            .iter()
            .map(|country| {
                let result = Self::country_growth(series, country, from_year, to_year, kind);
                if let Err(e) = &result {
                    warn!(metric = series.metric().label(), "{}", e);
                }
                (country.clone(), result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Metric;

    fn row(country: &str, year: i32, value: Option<f64>) -> TimeSeriesRow {
        TimeSeriesRow {
            country_name: country.to_string(),
            country_code: None,
            year,
            value,
        }
    }

    fn gdp_series() -> TimeSeries {
        TimeSeries::new(
            Metric::Gdp,
            vec![
                row("Japan", 2002, Some(4_000_000_000_000.0)),
                row("India", 2002, None),
                row("Japan", 2012, Some(6_200_000_000_000.0)),
                row("India", 2012, Some(1_800_000_000_000.0)),
                row("Japan", 2022, Some(4_300_000_000_000.0)),
                row("India", 2022, Some(4_300_000_000_000.0)),
            ],
        )
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_filter_by_country_and_year() {
        let filtered = GrowthCalculator::filter(&gdp_series(), &names(&["Japan"]), 2002, 2012);
        let years: Vec<i32> = filtered.rows().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2002, 2012]);
        assert!(filtered.rows().iter().all(|r| r.country_name == "Japan"));
        assert_eq!(filtered.metric(), Metric::Gdp);
    }

    #[test]
    fn test_filter_empty_selection_is_empty() {
        let filtered = GrowthCalculator::filter(&gdp_series(), &[], 2002, 2022);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_inverted_range_is_empty() {
        let filtered =
            GrowthCalculator::filter(&gdp_series(), &names(&["Japan", "India"]), 2022, 2002);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_lookup_distinguishes_missing_and_duplicate() {
        let mut rows = gdp_series().rows().to_vec();
        rows.push(row("Japan", 2002, Some(1.0)));
        let series = TimeSeries::new(Metric::Gdp, rows);

        assert!(GrowthCalculator::lookup(&series, "India", 2002).is_ok());
        assert_eq!(
            GrowthCalculator::lookup(&series, "Japan", 2002),
            Err(LookupError::DuplicateRow {
                country: "Japan".to_string(),
                year: 2002,
                count: 2
            })
        );
        assert_eq!(
            GrowthCalculator::lookup(&series, "France", 2002),
            Err(LookupError::MissingRow {
                country: "France".to_string(),
                year: 2002
            })
        );
    }

    #[test]
    fn test_gdp_delta_in_billions() {
        let growth =
            GrowthCalculator::country_growth(&gdp_series(), "Japan", 2002, 2022, GrowthKind::Absolute)
                .unwrap();
        assert_close(growth.growth.value().unwrap(), 300.0);
        assert_close(growth.last_value.unwrap(), 4300.0);
    }

    #[test]
    fn test_absent_baseline_is_not_applicable_but_keeps_last_value() {
        let growth =
            GrowthCalculator::country_growth(&gdp_series(), "India", 2002, 2022, GrowthKind::Absolute)
                .unwrap();
        assert_eq!(growth.growth, Growth::NotApplicable);
        assert_close(growth.last_value.unwrap(), 4300.0);
    }

    #[test]
    fn test_population_percent_growth() {
        let series = TimeSeries::new(
            Metric::Population,
            vec![
                row("Japan", 2002, Some(100_000_000.0)),
                row("Japan", 2022, Some(110_000_000.0)),
            ],
        );
        let growth =
            GrowthCalculator::country_growth(&series, "Japan", 2002, 2022, GrowthKind::Percent)
                .unwrap();
        assert_close(growth.growth.value().unwrap(), 10.0);
        assert_close(growth.last_value.unwrap(), 110.0);
    }

    #[test]
    fn test_zero_baseline_is_not_applicable() {
        assert_eq!(
            GrowthCalculator::compute_growth(Some(0.0), Some(5.0), GrowthKind::Percent),
            Growth::NotApplicable
        );
        assert_eq!(
            GrowthCalculator::compute_growth(Some(0.0), Some(5.0), GrowthKind::Ratio),
            Growth::NotApplicable
        );
        assert_eq!(
            GrowthCalculator::compute_growth(Some(0.0), Some(5.0), GrowthKind::Absolute),
            Growth::Value(5.0)
        );
    }

    #[test]
    fn test_absent_end_value_is_not_applicable() {
        assert_eq!(
            GrowthCalculator::compute_growth(Some(1.0), None, GrowthKind::Absolute),
            Growth::NotApplicable
        );
        assert_eq!(
            GrowthCalculator::compute_growth(Some(f64::NAN), Some(1.0), GrowthKind::Absolute),
            Growth::NotApplicable
        );
    }

    #[test]
    fn test_ratio_growth() {
        assert_eq!(
            GrowthCalculator::compute_growth(Some(2.0), Some(5.0), GrowthKind::Ratio),
            Growth::Value(2.5)
        );
    }

    #[test]
    fn test_summarize_is_idempotent_and_keeps_faults() {
        let series = gdp_series();
        let selected = names(&["Japan", "France", "India"]);

        let first = GrowthCalculator::summarize(&series, &selected, 2002, 2022, GrowthKind::Absolute);
        let second = GrowthCalculator::summarize(&series, &selected, 2002, 2022, GrowthKind::Absolute);

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].0, "Japan");
        assert!(matches!(first[1].1, Err(LookupError::MissingRow { .. })));
        assert_eq!(first[2].1.as_ref().unwrap().growth, Growth::NotApplicable);
    }
}
