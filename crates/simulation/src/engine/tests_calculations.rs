//! Unit tests for the projection formulas.

use super::calculations::*;
use super::types::ProjectedOutputs;
use crate::baseline::BaselineConstants;
use crate::inputs::{InputError, SimulationInputs};

fn eval(inputs: SimulationInputs) -> ProjectedOutputs {
    evaluate(&inputs, &BaselineConstants::default())
}

// -------------------------------------------------------------------------
// Reference scenarios
// -------------------------------------------------------------------------

#[test]
fn test_default_scenario() {
    let out = eval(SimulationInputs::new(120.0, 25.0, 0.8, 0.5, 10000.0));
    assert_eq!(out.valorized_material, 30.0);
    assert_eq!(out.avoided_gei, 96.0);
    assert_eq!(out.avoided_import_footprint, 15.0);
    assert_eq!(out.estimated_income, 300_000.0);
}

#[test]
fn test_lower_bound_scenario() {
    let out = eval(SimulationInputs::new(50.0, 10.0, 0.5, 0.1, 5000.0));
    assert_eq!(out.valorized_material, 5.0);
    assert_eq!(out.avoided_gei, 25.0);
    assert_eq!(out.avoided_import_footprint, 0.5);
    assert_eq!(out.estimated_income, 25_000.0);
}

#[test]
fn test_upper_bound_scenario() {
    let out = eval(SimulationInputs::new(200.0, 50.0, 2.0, 1.0, 15000.0));
    assert_eq!(out.valorized_material, 100.0);
    assert_eq!(out.avoided_gei, 400.0);
    assert_eq!(out.avoided_import_footprint, 100.0);
    assert_eq!(out.estimated_income, 1_500_000.0);
}

#[test]
fn test_default_projection_equals_baseline() {
    // The slider defaults reproduce the baseline figures exactly.
    let baseline = BaselineConstants::default();
    let out = ProjectedOutputs::default();
    assert_eq!(out.valorized_material, baseline.base_material);
    assert_eq!(out.avoided_gei, baseline.base_gei);
    assert_eq!(out.estimated_income, baseline.base_income);
}

// -------------------------------------------------------------------------
// Edge cases
// -------------------------------------------------------------------------

#[test]
fn test_zero_volume_zeroes_volume_derived_outputs() {
    let out = eval(SimulationInputs::new(0.0, 25.0, 0.8, 0.5, 10000.0));
    assert_eq!(out.valorized_material, 0.0);
    assert_eq!(out.avoided_gei, 0.0);
    assert_eq!(out.avoided_import_footprint, 0.0);
    assert_eq!(out.estimated_income, 0.0);
    assert_eq!(out.trained_people, 40);
    assert_eq!(out.industrial_symbiosis_count, 5);
}

#[test]
fn test_headcounts_come_from_injected_baseline() {
    let baseline = BaselineConstants {
        trained_people: 12,
        industrial_symbiosis_count: 2,
        ..BaselineConstants::default()
    };
    let out = evaluate(&SimulationInputs::default(), &baseline);
    assert_eq!(out.trained_people, 12);
    assert_eq!(out.industrial_symbiosis_count, 2);
}

#[test]
fn test_try_evaluate_rejects_negative_input() {
    let inputs = SimulationInputs::new(120.0, 25.0, -0.8, 0.5, 10000.0);
    let result = try_evaluate(&inputs, &BaselineConstants::default());
    assert!(matches!(
        result,
        Err(InputError::OutOfRange {
            field: "landfill_emission_factor",
            ..
        })
    ));
}

#[test]
fn test_try_evaluate_accepts_domain_bounds() {
    let baseline = BaselineConstants::default();
    assert!(try_evaluate(&SimulationInputs::new(50.0, 10.0, 0.5, 0.1, 5000.0), &baseline).is_ok());
    assert!(try_evaluate(&SimulationInputs::new(200.0, 50.0, 2.0, 1.0, 15000.0), &baseline).is_ok());
}

#[test]
fn test_percent_to_fraction() {
    assert_eq!(percent_to_fraction(25.0), 0.25);
    assert_eq!(percent_to_fraction(50.0), 0.5);
    assert_eq!(percent_to_fraction(0.0), 0.0);
}

// -------------------------------------------------------------------------
// Determinism
// -------------------------------------------------------------------------

#[test]
fn test_repeated_evaluation_is_bit_identical() {
    let inputs = SimulationInputs::new(170.0, 37.0, 1.3, 0.7, 11500.0);
    let a = eval(inputs);
    let b = eval(inputs);
    assert_eq!(a.valorized_material.to_bits(), b.valorized_material.to_bits());
    assert_eq!(a.avoided_gei.to_bits(), b.avoided_gei.to_bits());
    assert_eq!(
        a.avoided_import_footprint.to_bits(),
        b.avoided_import_footprint.to_bits()
    );
    assert_eq!(a.estimated_income.to_bits(), b.estimated_income.to_bits());
}
