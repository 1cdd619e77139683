use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::config::{ENV_HEADLESS_EXPORT, ENV_SCENARIO};
use simulation::DashboardSettings;

mod headless;

const WINDOW_TITLE: &str = "Visualizador de Impactos - Proyecto P2.2";

fn main() {
    // Headless export mode: render the three charts, print a summary and exit.
    if std::env::var(ENV_HEADLESS_EXPORT).is_ok() {
        // Logging first so configuration warnings are not lost.
        let mut logging = App::new();
        logging.add_plugins(bevy::log::LogPlugin::default());

        let settings = DashboardSettings::from_env();
        let scenario = std::env::var(ENV_SCENARIO).ok().map(PathBuf::from);
        std::process::exit(headless::run_headless_export(
            settings,
            scenario.as_deref(),
        ));
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            resolution: (1440.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(DashboardSettings::from_env())
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        export::ExportPlugin,
        ui::UiPlugin,
    ));

    app.run();
}
