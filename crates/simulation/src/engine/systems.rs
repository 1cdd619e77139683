//! ECS glue for the engine.

use bevy::prelude::*;

use crate::baseline::BaselineConstants;
use crate::inputs::SimulationInputs;

use super::calculations::evaluate;
use super::types::ProjectedOutputs;

/// Recompute the projection when the inputs or the baseline changed.
///
/// Out-of-domain inputs (set programmatically, never by the sliders) are
/// clamped before evaluation rather than silently computed.
pub fn recompute_projection(
    inputs: Res<SimulationInputs>,
    baseline: Res<BaselineConstants>,
    mut outputs: ResMut<ProjectedOutputs>,
) {
    if !inputs.is_changed() && !baseline.is_changed() {
        return;
    }

    let effective = match inputs.validate() {
        Ok(()) => *inputs,
        Err(err) => {
            warn!("Clamping simulation inputs into their domain: {err}");
            inputs.clamped()
        }
    };

    let projection = evaluate(&effective, &baseline);
    debug!(
        "Projection recomputed: material={} gei={} footprint={} income={}",
        projection.valorized_material,
        projection.avoided_gei,
        projection.avoided_import_footprint,
        projection.estimated_income
    );
    outputs.set_if_neq(projection);
}
