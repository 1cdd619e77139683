//! Engine output type.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::baseline::BaselineConstants;
use crate::inputs::SimulationInputs;

/// Projected annual indicators for one set of inputs.
///
/// Values are unrounded; display formatting lives in [`crate::formatting`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedOutputs {
    /// Discards turned into product, tons/year.
    pub valorized_material: f64,
    /// Landfill emissions avoided, tCO2e/year.
    pub avoided_gei: f64,
    /// Import transport emissions avoided, tCO2e/year.
    pub avoided_import_footprint: f64,
    /// Sales of the valorized product, USD/year.
    pub estimated_income: f64,
    pub trained_people: u32,
    pub industrial_symbiosis_count: u32,
}

impl Default for ProjectedOutputs {
    /// Projection for the default slider positions.
    fn default() -> Self {
        super::evaluate(&SimulationInputs::default(), &BaselineConstants::default())
    }
}
