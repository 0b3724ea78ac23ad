//! Long-format time series types.

/// First year reshaped from the wide tables.
pub const MIN_YEAR: i32 = 2002;
/// Last year reshaped from the wide tables.
pub const MAX_YEAR: i32 = 2022;

pub const COUNTRY_NAME_COLUMN: &str = "Country Name";
pub const COUNTRY_CODE_COLUMN: &str = "Country Code";

/// Which statistic a series holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Gdp,
    Population,
}

impl Metric {
    /// Value column label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Gdp => "GDP",
            Metric::Population => "Population",
        }
    }

    /// Divisor applied to raw values before display.
    pub fn display_scale(&self) -> f64 {
        match self {
            Metric::Gdp => 1_000_000_000.0,
            Metric::Population => 1_000_000.0,
        }
    }

    /// Unit suffix matching `display_scale`.
    pub fn display_unit(&self) -> &'static str {
        match self {
            Metric::Gdp => "B",
            Metric::Population => "M",
        }
    }
}

/// One (country, year) observation. `value` is `None` when the source cell was blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRow {
    pub country_name: String,
    pub country_code: Option<String>,
    pub year: i32,
    pub value: Option<f64>,
}

/// Long-format table for a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    metric: Metric,
    rows: Vec<TimeSeriesRow>,
}

impl TimeSeries {
    pub fn new(metric: Metric, rows: Vec<TimeSeriesRow>) -> Self {
        Self { metric, rows }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn rows(&self) -> &[TimeSeriesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Unique country names in order of first appearance.
    pub fn countries(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.country_name.as_str()))
            .map(|row| row.country_name.clone())
            .collect()
    }

    /// Smallest and largest year present, if any.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.year).min()?;
        let max = self.rows.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Rows of one country ordered by year.
    pub fn country_rows(&self, country: &str) -> Vec<&TimeSeriesRow> {
        let mut rows: Vec<&TimeSeriesRow> = self
            .rows
            .iter()
            .filter(|r| r.country_name == country)
            .collect();
        rows.sort_by_key(|r| r.year);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: i32, value: Option<f64>) -> TimeSeriesRow {
        TimeSeriesRow {
            country_name: country.to_string(),
            country_code: None,
            year,
            value,
        }
    }

    #[test]
    fn test_countries_keep_first_appearance_order() {
        let series = TimeSeries::new(
            Metric::Gdp,
            vec![
                row("Japan", 2002, Some(1.0)),
                row("India", 2002, None),
                row("Japan", 2003, Some(2.0)),
            ],
        );
        assert_eq!(series.countries(), vec!["Japan", "India"]);
    }

    #[test]
    fn test_year_bounds() {
        let series = TimeSeries::new(
            Metric::Population,
            vec![row("Japan", 2010, None), row("Japan", 2004, Some(3.0))],
        );
        assert_eq!(series.year_bounds(), Some((2004, 2010)));
        assert_eq!(TimeSeries::new(Metric::Gdp, vec![]).year_bounds(), None);
    }

    #[test]
    fn test_country_rows_sorted_by_year() {
        let series = TimeSeries::new(
            Metric::Gdp,
            vec![row("Japan", 2005, Some(5.0)), row("Japan", 2003, Some(3.0))],
        );
        let years: Vec<i32> = series.country_rows("Japan").iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2003, 2005]);
    }
}
