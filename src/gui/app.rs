//! Country Data Main Application
//! Main window with control panel and dashboard.

use crate::config::DashboardConfig;
use crate::data::CountryDataset;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DashboardView};
use egui::{Color32, ColorImage, SidePanel, TextureHandle, TextureOptions};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main application window.
pub struct CountryDashboardApp {
    dataset: CountryDataset,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    view: DashboardView,
    background: Option<TextureHandle>,
}

impl CountryDashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        dataset: CountryDataset,
        config: &DashboardConfig,
    ) -> Self {
        let control_panel = ControlPanel::new(
            dataset.countries(),
            &config.default_countries,
            dataset.year_bounds(),
        );
        let view = DashboardView::build(
            &dataset,
            &control_panel.selected,
            control_panel.from_year,
            control_panel.to_year,
            control_panel.gdp_growth,
        );

        let background = config.background_image.as_deref().and_then(|path| {
            match Self::load_background(path) {
                Ok(image) => {
                    info!(path = %path.display(), "loaded background image");
                    Some(cc.egui_ctx.load_texture("background", image, TextureOptions::LINEAR))
                }
                Err(e) => {
                    warn!(path = %path.display(), "background image unavailable: {}", e);
                    None
                }
            }
        });

        Self {
            dataset,
            control_panel,
            chart_viewer: ChartViewer::new(),
            view,
            background,
        }
    }

    fn load_background(path: &Path) -> Result<ColorImage, image::ImageError> {
        let rgba = image::open(path)?.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
    }

    /// Recompute charts and cards from the current controls.
    fn refresh_view(&mut self) {
        let panel = &self.control_panel;
        debug!(
            countries = panel.selected.len(),
            from = panel.from_year,
            to = panel.to_year,
            "selection changed"
        );
        self.view = DashboardView::build(
            &self.dataset,
            &panel.selected,
            panel.from_year,
            panel.to_year,
            panel.gdp_growth,
        );
    }
}

impl eframe::App for CountryDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::SelectionChanged => self.refresh_view(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.background {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter()
                    .image(texture.id(), ui.max_rect(), uv, Color32::from_white_alpha(70));
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.chart_viewer.show(ui, &self.view);
                });
        });
    }
}
