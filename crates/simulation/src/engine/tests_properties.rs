//! Property tests for the projection laws over the slider domains.

use proptest::prelude::*;

use super::calculations::evaluate;
use crate::baseline::BaselineConstants;
use crate::inputs::SimulationInputs;

fn in_domain_inputs() -> impl Strategy<Value = SimulationInputs> {
    (
        50.0f64..=200.0,
        10.0f64..=50.0,
        0.5f64..=2.0,
        0.1f64..=1.0,
        5000.0f64..=15000.0,
    )
        .prop_map(|(v, r, l, t, p)| SimulationInputs::new(v, r, l, t, p))
}

proptest! {
    #[test]
    fn valorized_material_is_volume_times_rate(inputs in in_domain_inputs()) {
        let out = evaluate(&inputs, &BaselineConstants::default());
        let expected = inputs.total_volume * (inputs.recovery_rate_pct / 100.0);
        prop_assert_eq!(out.valorized_material.to_bits(), expected.to_bits());
        let relaxed = inputs.total_volume * inputs.recovery_rate_pct / 100.0;
        prop_assert!((out.valorized_material - relaxed).abs() <= 1e-12 * relaxed.abs());
    }

    #[test]
    fn avoided_gei_is_volume_times_landfill_factor(inputs in in_domain_inputs()) {
        let out = evaluate(&inputs, &BaselineConstants::default());
        prop_assert_eq!(
            out.avoided_gei.to_bits(),
            (inputs.total_volume * inputs.landfill_emission_factor).to_bits()
        );
    }

    #[test]
    fn footprint_and_income_compose_on_valorized_material(inputs in in_domain_inputs()) {
        let out = evaluate(&inputs, &BaselineConstants::default());
        prop_assert_eq!(
            out.avoided_import_footprint.to_bits(),
            (out.valorized_material * inputs.transport_emission_factor).to_bits()
        );
        prop_assert_eq!(
            out.estimated_income.to_bits(),
            (out.valorized_material * inputs.market_price).to_bits()
        );
    }

    #[test]
    fn headcounts_never_depend_on_inputs(inputs in in_domain_inputs()) {
        let out = evaluate(&inputs, &BaselineConstants::default());
        prop_assert_eq!(out.trained_people, 40);
        prop_assert_eq!(out.industrial_symbiosis_count, 5);
    }

    #[test]
    fn outputs_are_non_negative_in_domain(inputs in in_domain_inputs()) {
        let out = evaluate(&inputs, &BaselineConstants::default());
        prop_assert!(out.valorized_material >= 0.0);
        prop_assert!(out.avoided_gei >= 0.0);
        prop_assert!(out.avoided_import_footprint >= 0.0);
        prop_assert!(out.estimated_income >= 0.0);
    }
}
