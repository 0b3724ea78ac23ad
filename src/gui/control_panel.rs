//! Control Panel Widget
//! Left side panel with country selection, year range and growth mode.

use crate::stats::GrowthKind;
use egui::{Color32, RichText, ScrollArea};
use tracing::warn;

/// Left side control panel.
pub struct ControlPanel {
    /// Every country in the data, in file order
    pub countries: Vec<String>,
    /// Selected countries, in the order they were picked
    pub selected: Vec<String>,
    pub search: String,
    pub min_year: i32,
    pub max_year: i32,
    pub from_year: i32,
    pub to_year: i32,
    pub gdp_growth: GrowthKind,
}

impl ControlPanel {
    /// Start with `defaults` selected (those present in the data) and the full year range.
    pub fn new(countries: Vec<String>, defaults: &[String], year_bounds: (i32, i32)) -> Self {
        let mut selected = Vec::new();
        for country in defaults {
            if countries.contains(country) {
                if !selected.contains(country) {
                    selected.push(country.clone());
                }
            } else {
                warn!(country = %country, "default country not found in data");
            }
        }

        let (min_year, max_year) = year_bounds;
        Self {
            countries,
            selected,
            search: String::new(),
            min_year,
            max_year,
            from_year: min_year,
            to_year: max_year,
            gdp_growth: GrowthKind::Absolute,
        }
    }

    pub fn is_selected(&self, country: &str) -> bool {
        self.selected.iter().any(|c| c == country)
    }

    /// Add or remove a country; additions go to the end of the selection.
    pub fn toggle_country(&mut self, country: &str) {
        if let Some(pos) = self.selected.iter().position(|c| c == country) {
            self.selected.remove(pos);
        } else if self.countries.iter().any(|c| c == country) {
            self.selected.push(country.to_string());
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.countries.clone();
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Move the start year; an end year before it is pulled up to match.
    pub fn set_from_year(&mut self, year: i32) {
        self.from_year = year.clamp(self.min_year, self.max_year);
        if self.to_year < self.from_year {
            self.to_year = self.from_year;
        }
    }

    /// Move the end year; a start year after it is pulled down to match.
    pub fn set_to_year(&mut self, year: i32) {
        self.to_year = year.clamp(self.min_year, self.max_year);
        if self.from_year > self.to_year {
            self.from_year = self.to_year;
        }
    }

    /// Countries matching the search box (case-insensitive).
    pub fn visible_countries(&self) -> Vec<&String> {
        let needle = self.search.trim().to_lowercase();
        self.countries
            .iter()
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .collect()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌎 Country Data")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new("Explorer").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Countries Section =====
        ui.label(RichText::new("🏳 Select countries").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.text_edit_singleline(&mut self.search);
        });
        ui.add_space(5.0);

        let mut toggled: Option<String> = None;
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    for country in self.visible_countries() {
                        let mut checked = self.is_selected(country);
                        if ui.checkbox(&mut checked, country.as_str()).changed() {
                            toggled = Some(country.clone());
                        }
                    }
                });
            });
        if let Some(country) = toggled {
            self.toggle_country(&country);
            action = ControlPanelAction::SelectionChanged;
        }

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.select_all();
                action = ControlPanelAction::SelectionChanged;
            }
            if ui.small_button("Clear All").clicked() {
                self.clear_all();
                action = ControlPanelAction::SelectionChanged;
            }
            ui.label(
                RichText::new(format!("{} selected", self.selected.len()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Year Range Section =====
        ui.label(RichText::new("📅 Range of years").size(14.0).strong());
        ui.add_space(5.0);

        let range = self.min_year..=self.max_year;
        let mut from_year = self.from_year;
        if ui
            .add(egui::Slider::new(&mut from_year, range.clone()).text("From"))
            .changed()
        {
            self.set_from_year(from_year);
            action = ControlPanelAction::SelectionChanged;
        }
        let mut to_year = self.to_year;
        if ui
            .add(egui::Slider::new(&mut to_year, range).text("To"))
            .changed()
        {
            self.set_to_year(to_year);
            action = ControlPanelAction::SelectionChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== GDP Growth Mode =====
        ui.label(RichText::new("📈 GDP growth").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            let absolute = ui
                .radio_value(&mut self.gdp_growth, GrowthKind::Absolute, "Difference")
                .changed();
            let ratio = ui
                .radio_value(&mut self.gdp_growth, GrowthKind::Ratio, "Ratio")
                .changed();
            if absolute || ratio {
                action = ControlPanelAction::SelectionChanged;
            }
        });

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn panel() -> ControlPanel {
        ControlPanel::new(
            names(&["Japan", "India", "China", "Brazil"]),
            &names(&["China", "India", "United Kingdom", "China"]),
            (2002, 2022),
        )
    }

    #[test]
    fn test_defaults_missing_from_data_are_dropped() {
        let panel = panel();
        assert_eq!(panel.selected, names(&["China", "India"]));
        assert_eq!((panel.from_year, panel.to_year), (2002, 2022));
        assert_eq!(panel.gdp_growth, GrowthKind::Absolute);
    }

    #[test]
    fn test_toggle_appends_and_removes() {
        let mut panel = panel();
        panel.toggle_country("Brazil");
        assert_eq!(panel.selected, names(&["China", "India", "Brazil"]));
        panel.toggle_country("India");
        assert_eq!(panel.selected, names(&["China", "Brazil"]));
        panel.toggle_country("Atlantis");
        assert_eq!(panel.selected.len(), 2);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut panel = panel();
        panel.select_all();
        assert_eq!(panel.selected, panel.countries);
        panel.clear_all();
        assert!(panel.selected.is_empty());
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut panel = panel();
        panel.search = "IN".to_string();
        assert_eq!(panel.visible_countries(), vec!["India", "China"]);
    }

    #[test]
    fn test_year_range_never_crosses() {
        let mut panel = panel();
        panel.set_to_year(2010);
        panel.set_from_year(2015);
        assert_eq!((panel.from_year, panel.to_year), (2015, 2015));

        panel.set_to_year(2005);
        assert_eq!((panel.from_year, panel.to_year), (2005, 2005));

        panel.set_from_year(1990);
        panel.set_to_year(2030);
        assert_eq!((panel.from_year, panel.to_year), (2002, 2022));
    }
}
