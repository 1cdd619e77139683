//! Baseline ("no intervention") reference values and fixed headcounts.
//!
//! Injected into the engine as an immutable resource. Nothing in the dashboard
//! mutates it after startup.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const BASE_MATERIAL_TONS: f64 = 30.0;
pub const BASE_GEI_TCO2E: f64 = 96.0;
pub const BASE_INCOME_USD: f64 = 300_000.0;
pub const BASE_FOOTPRINT_TCO2E: f64 = 15.0;
pub const TRAINED_PEOPLE: u32 = 40;
pub const INDUSTRIAL_SYMBIOSIS_COUNT: u32 = 5;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineConstants {
    /// Material valorized without the project, tons/year.
    pub base_material: f64,
    /// Landfill emissions without the project, tCO2e/year.
    pub base_gei: f64,
    /// Income without the project, USD/year.
    pub base_income: f64,
    /// Import footprint placeholder, tCO2e/year. Declared but not consumed by
    /// any indicator or chart.
    pub base_footprint: f64,
    pub trained_people: u32,
    pub industrial_symbiosis_count: u32,
}

impl Default for BaselineConstants {
    fn default() -> Self {
        Self {
            base_material: BASE_MATERIAL_TONS,
            base_gei: BASE_GEI_TCO2E,
            base_income: BASE_INCOME_USD,
            base_footprint: BASE_FOOTPRINT_TCO2E,
            trained_people: TRAINED_PEOPLE,
            industrial_symbiosis_count: INDUSTRIAL_SYMBIOSIS_COUNT,
        }
    }
}
