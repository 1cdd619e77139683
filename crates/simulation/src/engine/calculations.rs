//! The projection formulas.

use crate::baseline::BaselineConstants;
use crate::inputs::{InputError, SimulationInputs};

use super::types::ProjectedOutputs;

/// Convert a percentage to a fraction.
pub fn percent_to_fraction(pct: f64) -> f64 {
    pct / 100.0
}

/// Evaluate the projection for `inputs`.
///
/// Operands are combined in a fixed order so results are reproducible to the
/// bit: the import footprint and income are derived from the valorized
/// material, never from the raw volume. Inputs are assumed to be in domain;
/// callers holding untrusted values go through [`try_evaluate`].
pub fn evaluate(inputs: &SimulationInputs, baseline: &BaselineConstants) -> ProjectedOutputs {
    let recovery_rate = percent_to_fraction(inputs.recovery_rate_pct);
    let valorized_material = inputs.total_volume * recovery_rate;
    let avoided_gei = inputs.total_volume * inputs.landfill_emission_factor;
    let avoided_import_footprint = valorized_material * inputs.transport_emission_factor;
    let estimated_income = valorized_material * inputs.market_price;

    ProjectedOutputs {
        valorized_material,
        avoided_gei,
        avoided_import_footprint,
        estimated_income,
        trained_people: baseline.trained_people,
        industrial_symbiosis_count: baseline.industrial_symbiosis_count,
    }
}

/// Validate `inputs` against the slider domains, then evaluate.
pub fn try_evaluate(
    inputs: &SimulationInputs,
    baseline: &BaselineConstants,
) -> Result<ProjectedOutputs, InputError> {
    inputs.validate()?;
    Ok(evaluate(inputs, baseline))
}
