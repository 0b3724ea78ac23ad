//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::CountryDashboardApp;
pub use chart_viewer::{ChartViewer, DashboardView};
pub use control_panel::{ControlPanel, ControlPanelAction};
