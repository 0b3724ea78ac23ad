//! Data module - CSV loading and reshaping

mod dataset;
mod loader;
mod processor;
mod series;

pub use dataset::CountryDataset;
pub use series::{Metric, TimeSeries, TimeSeriesRow};
