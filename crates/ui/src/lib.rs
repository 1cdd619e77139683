use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::DashboardSet;

pub mod charts;
pub mod dashboard;
pub mod sidebar;
pub mod theme;
pub mod ui_widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_brand_theme)
            .add_systems(Update, sidebar::sidebar_ui.in_set(DashboardSet::Input))
            .add_systems(
                Update,
                dashboard::dashboard_ui
                    .in_set(DashboardSet::Present)
                    .after(export::export_plugin::handle_export_requests),
            );
    }
}
