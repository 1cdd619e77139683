use bevy::prelude::*;

pub mod baseline;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod formatting;
pub mod inputs;
pub mod localization;
pub mod parameters;
pub mod test_harness;

pub use baseline::BaselineConstants;
pub use comparison::{ComparisonSeries, Indicator};
pub use config::DashboardSettings;
pub use engine::{evaluate, ProjectedOutputs};
pub use inputs::{InputError, SimulationInputs};
pub use localization::LocalizationState;

/// Per-frame ordering: read widgets, recompute, then draw.
///
/// Slider systems run in `Input`, the engine in `Compute`, and every panel
/// that displays outputs in `Present`, so a slider drag is reflected in the
/// same frame it happens.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DashboardSet {
    Input,
    Compute,
    Present,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashboardSettings>()
            .init_resource::<BaselineConstants>()
            .init_resource::<SimulationInputs>()
            .init_resource::<ProjectedOutputs>()
            .init_resource::<LocalizationState>()
            .configure_sets(
                Update,
                (
                    DashboardSet::Input,
                    DashboardSet::Compute,
                    DashboardSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, localization::apply_configured_locale)
            .add_systems(
                Update,
                engine::recompute_projection.in_set(DashboardSet::Compute),
            );
    }
}
