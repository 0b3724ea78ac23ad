//! Stats module - filtering and growth metrics

mod calculator;
mod format;

pub use calculator::{CountryGrowth, Growth, GrowthCalculator, GrowthKind, LookupError};
pub use format::{format_growth, format_value};
