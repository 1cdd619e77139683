//! # TestDashboard — headless harness for integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`SimulationPlugin`] so
//! tests can drive the inputs resource the way the sliders do and read back
//! the projection after a frame.

use bevy::app::App;
use bevy::prelude::*;

use crate::baseline::BaselineConstants;
use crate::comparison::{comparison_set, ComparisonSeries};
use crate::config::DashboardSettings;
use crate::engine::ProjectedOutputs;
use crate::inputs::SimulationInputs;
use crate::localization::LocalizationState;
use crate::parameters::ParameterId;
use crate::SimulationPlugin;

pub struct TestDashboard {
    app: App,
}

impl Default for TestDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDashboard {
    /// Dashboard at its default slider positions, with Startup already run.
    pub fn new() -> Self {
        Self::with_settings(DashboardSettings::default())
    }

    pub fn with_settings(settings: DashboardSettings) -> Self {
        Self::build(settings, |_| {})
    }

    /// Like [`Self::with_settings`], with a hook to register extra plugins
    /// (export, branding) before the first frame.
    pub fn build(settings: DashboardSettings, configure: impl FnOnce(&mut App)) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(settings);
        app.add_plugins(SimulationPlugin);
        configure(&mut app);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    /// Replace all five inputs, as if every slider moved at once.
    pub fn with_inputs(mut self, inputs: SimulationInputs) -> Self {
        self.app.insert_resource(inputs);
        self
    }

    /// Move one slider. The value is clamped exactly like the sidebar does.
    pub fn with_slider(mut self, id: ParameterId, value: f64) -> Self {
        self.set_slider(id, value);
        self
    }

    pub fn with_baseline(mut self, baseline: BaselineConstants) -> Self {
        self.app.insert_resource(baseline);
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    pub fn set_slider(&mut self, id: ParameterId, value: f64) {
        if let Some(mut inputs) = self.app.world_mut().get_resource_mut::<SimulationInputs>() {
            inputs.set_clamped(id, value);
        }
    }

    /// Write the inputs resource without clamping, bypassing the sliders.
    pub fn set_raw_inputs(&mut self, inputs: SimulationInputs) {
        self.app.insert_resource(inputs);
    }

    /// Run `n` frames.
    pub fn tick(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn inputs(&self) -> SimulationInputs {
        *self.app.world().resource::<SimulationInputs>()
    }

    pub fn outputs(&self) -> ProjectedOutputs {
        *self.app.world().resource::<ProjectedOutputs>()
    }

    pub fn baseline(&self) -> BaselineConstants {
        *self.app.world().resource::<BaselineConstants>()
    }

    pub fn charts(&self) -> [ComparisonSeries; 3] {
        comparison_set(&self.baseline(), &self.outputs())
    }

    pub fn localization(&self) -> &LocalizationState {
        self.app.world().resource::<LocalizationState>()
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
