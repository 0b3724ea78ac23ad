//! Chart Viewer Widget
//! Central panel: GDP and population charts followed by per-country metric cards.

use crate::charts::{ChartData, ChartPlotter};
use crate::data::{CountryDataset, Metric, TimeSeries};
use crate::stats::{
    format_growth, format_value, CountryGrowth, Growth, GrowthCalculator, GrowthKind, LookupError,
};
use egui::{Color32, RichText};

/// Cards share a row with one caption column.
const CARD_COLUMNS: usize = 5;

const POSITIVE: Color32 = Color32::from_rgb(40, 167, 69);
const NEGATIVE: Color32 = Color32::from_rgb(220, 53, 69);

/// How a card's delta is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaColor {
    Normal,
    Off,
    Error,
}

/// One summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub delta_color: DeltaColor,
    pub increasing: bool,
}

impl MetricCard {
    pub fn from_result(
        country: &str,
        metric: Metric,
        result: &Result<CountryGrowth, LookupError>,
    ) -> Self {
        let label = format!("{} {}", country, metric.label());
        match result {
            Ok(growth) => {
                let unit = metric.display_unit();
                let increasing = match growth.growth.value() {
                    Some(v) if growth.kind == GrowthKind::Ratio => v >= 1.0,
                    Some(v) => v >= 0.0,
                    None => true,
                };
                Self {
                    label,
                    value: format_value(growth.last_value, unit),
                    delta: format_growth(growth.growth, growth.kind, unit),
                    delta_color: match growth.growth {
                        Growth::Value(_) => DeltaColor::Normal,
                        Growth::NotApplicable => DeltaColor::Off,
                    },
                    increasing,
                }
            }
            Err(e) => Self {
                label,
                value: "data error".to_string(),
                delta: e.to_string(),
                delta_color: DeltaColor::Error,
                increasing: false,
            },
        }
    }
}

/// Everything drawn for one (selection, range, mode) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selected: Vec<String>,
    pub from_year: i32,
    pub to_year: i32,
    pub gdp_kind: GrowthKind,
    pub gdp_chart: ChartData,
    pub gdp_cards: Vec<MetricCard>,
    pub population_chart: Option<ChartData>,
    pub population_cards: Option<Vec<MetricCard>>,
}

impl DashboardView {
    pub fn build(
        dataset: &CountryDataset,
        selected: &[String],
        from_year: i32,
        to_year: i32,
        gdp_kind: GrowthKind,
    ) -> Self {
        let (gdp_chart, gdp_cards) =
            Self::metric_section(&dataset.gdp, selected, from_year, to_year, gdp_kind);
        let (population_chart, population_cards) = dataset
            .population
            .as_ref()
            .map(|pop| Self::metric_section(pop, selected, from_year, to_year, GrowthKind::Percent))
            .unzip();

        Self {
            selected: selected.to_vec(),
            from_year,
            to_year,
            gdp_kind,
            gdp_chart,
            gdp_cards,
            population_chart,
            population_cards,
        }
    }

    fn metric_section(
        series: &TimeSeries,
        selected: &[String],
        from_year: i32,
        to_year: i32,
        kind: GrowthKind,
    ) -> (ChartData, Vec<MetricCard>) {
        let filtered = GrowthCalculator::filter(series, selected, from_year, to_year);
        let chart = ChartData::from_series(&filtered, selected);
        let cards = GrowthCalculator::summarize(series, selected, from_year, to_year, kind)
            .iter()
            .map(|(country, result)| MetricCard::from_result(country, series.metric(), result))
            .collect();
        (chart, cards)
    }
}

/// Central scrollable dashboard.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut egui::Ui, view: &DashboardView) {
        ui.heading(RichText::new("🌎 Country Data Explorer").size(26.0).strong());
        ui.horizontal(|ui| {
            ui.label("All data is collected from the");
            ui.hyperlink_to("World Bank Open Data", "https://data.worldbank.org/");
            ui.label("website.");
        });
        ui.add_space(10.0);

        if view.selected.is_empty() {
            ui.colored_label(
                Color32::from_rgb(243, 156, 18),
                "⚠ Select at least one country",
            );
            ui.add_space(10.0);
        }

        Self::section_header(ui, "GDP");
        ChartPlotter::draw_line_chart(ui, &view.gdp_chart);
        ui.add_space(20.0);

        if let Some(population_chart) = &view.population_chart {
            Self::section_header(ui, "Population");
            ChartPlotter::draw_bar_chart(ui, population_chart);
            ui.add_space(20.0);
        }

        Self::section_header(ui, &format!("Country statistics in {}", view.to_year));

        let gdp_caption = match view.gdp_kind {
            GrowthKind::Ratio => format!("GDP ratio since {}:", view.from_year),
            _ => format!("GDP increase (in USD Billion) since {}:", view.from_year),
        };
        Self::draw_card_row(ui, &gdp_caption, &view.gdp_cards);

        if let Some(cards) = &view.population_cards {
            ui.add_space(10.0);
            let caption = format!(
                "Population percentage growth (%) increase since {}:",
                view.from_year
            );
            Self::draw_card_row(ui, &caption, cards);
        }
    }

    fn section_header(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(20.0).strong());
        ui.separator();
        ui.add_space(5.0);
    }

    /// Caption in the first column, cards round-robin over the rest.
    fn draw_card_row(ui: &mut egui::Ui, caption: &str, cards: &[MetricCard]) {
        ui.columns(CARD_COLUMNS, |columns| {
            columns[0].label(RichText::new(caption).size(13.0));
            for (i, card) in cards.iter().enumerate() {
                let col = &mut columns[1 + i % (CARD_COLUMNS - 1)];
                Self::draw_card(col, card);
                col.add_space(8.0);
            }
        });
    }

    fn draw_card(ui: &mut egui::Ui, card: &MetricCard) {
        let (arrow, delta_color) = match card.delta_color {
            DeltaColor::Normal if card.increasing => ("⬆ ", POSITIVE),
            DeltaColor::Normal => ("⬇ ", NEGATIVE),
            DeltaColor::Off => ("", Color32::GRAY),
            DeltaColor::Error => ("⚠ ", NEGATIVE),
        };

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&card.label).size(12.0).color(Color32::GRAY));
                ui.label(RichText::new(&card.value).size(22.0).strong());
                ui.label(
                    RichText::new(format!("{}{}", arrow, card.delta))
                        .size(12.0)
                        .color(delta_color),
                );
            });
    }
}
