//! Chart Plotter Module
//! Draws GDP line charts and population bar charts using egui_plot.

use crate::data::{Metric, TimeSeries};
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const CHART_HEIGHT: f32 = 280.0;
const BAR_WIDTH: f64 = 0.7;

/// Plot-ready values for one metric, one entry per selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub metric: Metric,
    /// Every year present in the filtered series, ascending
    pub years: Vec<i32>,
    /// (country, value per entry of `years` in display units, `None` when absent)
    pub series: Vec<(String, Vec<Option<f64>>)>,
}

impl ChartData {
    /// Build from an already filtered series, keeping `countries` order.
    pub fn from_series(filtered: &TimeSeries, countries: &[String]) -> Self {
        let scale = filtered.metric().display_scale();
        let mut years: Vec<i32> = filtered.rows().iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        let series = countries
            .iter()
            .map(|country| {
                let rows = filtered.country_rows(country);
                let values = years
                    .iter()
                    .map(|year| {
                        rows.iter()
                            .find(|r| r.year == *year)
                            .and_then(|r| r.value)
                            .map(|v| v / scale)
                    })
                    .collect();
                (country.clone(), values)
            })
            .collect();

        Self {
            metric: filtered.metric(),
            years,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series
            .iter()
            .all(|(_, values)| values.iter().all(Option::is_none))
    }

    /// Line points for one country; absent years are skipped.
    pub fn line_points(&self, values: &[Option<f64>]) -> Vec<[f64; 2]> {
        self.years
            .iter()
            .zip(values)
            .filter_map(|(year, value)| value.map(|v| [*year as f64, v]))
            .collect()
    }

    /// Bar heights for one country over every year; absent years are zero so that
    /// stacked charts stay index-aligned.
    pub fn bar_heights(&self, values: &[Option<f64>]) -> Vec<[f64; 2]> {
        self.years
            .iter()
            .zip(values)
            .map(|(year, value)| [*year as f64, value.unwrap_or(0.0)])
            .collect()
    }

    fn y_axis_label(&self) -> String {
        match self.metric {
            Metric::Gdp => "GDP (USD billion)".to_string(),
            Metric::Population => "Population (million)".to_string(),
        }
    }
}

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the country at `index` in the selection.
    pub fn get_country_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Axis label for whole years only.
    fn format_year(mark: egui_plot::GridMark) -> String {
        if mark.value.fract() == 0.0 {
            format!("{:.0}", mark.value)
        } else {
            String::new()
        }
    }

    /// One line per country.
    pub fn draw_line_chart(ui: &mut egui::Ui, data: &ChartData) {
        Plot::new("gdp_line_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label(data.y_axis_label())
            .x_axis_formatter(|mark, _range| Self::format_year(mark))
            .show(ui, |plot_ui| {
                for (i, (country, values)) in data.series.iter().enumerate() {
                    let points = data.line_points(values);
                    if points.is_empty() {
                        continue;
                    }
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(Self::get_country_color(i))
                            .width(2.0)
                            .name(country),
                    );
                }
            });
    }

    /// Bars per year, stacked by country.
    pub fn draw_bar_chart(ui: &mut egui::Ui, data: &ChartData) {
        Plot::new("population_bar_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label(data.y_axis_label())
            .x_axis_formatter(|mark, _range| Self::format_year(mark))
            .show(ui, |plot_ui| {
                let mut charts: Vec<BarChart> = Vec::with_capacity(data.series.len());

                for (i, (country, values)) in data.series.iter().enumerate() {
                    let bars: Vec<Bar> = data
                        .bar_heights(values)
                        .iter()
                        .map(|&[year, value]| Bar::new(year, value).width(BAR_WIDTH))
                        .collect();

                    let below: Vec<&BarChart> = charts.iter().collect();
                    let chart = BarChart::new(bars)
                        .color(Self::get_country_color(i))
                        .name(country)
                        .stack_on(&below);
                    charts.push(chart);
                }

                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
    }
}
