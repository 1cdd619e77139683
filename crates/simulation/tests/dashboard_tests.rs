//! Headless dashboard tests: slider writes flow through the projection system
//! within a single frame.
//!
//! Run: cargo test -p simulation --test dashboard_tests

use simulation::baseline::BaselineConstants;
use simulation::comparison::Indicator;
use simulation::config::DashboardSettings;
use simulation::parameters::ParameterId;
use simulation::test_harness::TestDashboard;
use simulation::SimulationInputs;

// ---------------------------------------------------------------------------
// Startup state
// ---------------------------------------------------------------------------

#[test]
fn test_startup_projection_matches_defaults() {
    let dash = TestDashboard::new();
    let out = dash.outputs();
    assert_eq!(out.valorized_material, 30.0);
    assert_eq!(out.avoided_gei, 96.0);
    assert_eq!(out.avoided_import_footprint, 15.0);
    assert_eq!(out.estimated_income, 300_000.0);
    assert_eq!(out.trained_people, 40);
    assert_eq!(out.industrial_symbiosis_count, 5);
}

#[test]
fn test_startup_applies_configured_locale() {
    let settings = DashboardSettings {
        locale: "en".to_string(),
        ..DashboardSettings::default()
    };
    let dash = TestDashboard::with_settings(settings);
    assert_eq!(dash.localization().t("series.projection"), "Projection");
}

// ---------------------------------------------------------------------------
// Slider interaction
// ---------------------------------------------------------------------------

#[test]
fn test_slider_change_recomputes_in_one_frame() {
    let mut dash = TestDashboard::new().with_slider(ParameterId::TotalVolume, 200.0);
    dash.tick(1);
    let out = dash.outputs();
    assert_eq!(out.valorized_material, 50.0);
    assert_eq!(out.avoided_gei, 160.0);
    assert_eq!(out.avoided_import_footprint, 25.0);
    assert_eq!(out.estimated_income, 500_000.0);
}

#[test]
fn test_lower_bound_scenario_through_the_app() {
    let mut dash =
        TestDashboard::new().with_inputs(SimulationInputs::new(50.0, 10.0, 0.5, 0.1, 5000.0));
    dash.tick(1);
    let out = dash.outputs();
    assert_eq!(out.valorized_material, 5.0);
    assert_eq!(out.avoided_gei, 25.0);
    assert_eq!(out.avoided_import_footprint, 0.5);
    assert_eq!(out.estimated_income, 25_000.0);
}

#[test]
fn test_upper_bound_scenario_through_the_app() {
    let mut dash =
        TestDashboard::new().with_inputs(SimulationInputs::new(200.0, 50.0, 2.0, 1.0, 15000.0));
    dash.tick(1);
    let out = dash.outputs();
    assert_eq!(out.valorized_material, 100.0);
    assert_eq!(out.avoided_gei, 400.0);
    assert_eq!(out.avoided_import_footprint, 100.0);
    assert_eq!(out.estimated_income, 1_500_000.0);
}

#[test]
fn test_slider_values_are_clamped_into_domain() {
    let mut dash = TestDashboard::new()
        .with_slider(ParameterId::RecoveryRatePct, 95.0)
        .with_slider(ParameterId::MarketPrice, -1.0);
    dash.tick(1);
    let inputs = dash.inputs();
    assert_eq!(inputs.recovery_rate_pct, 50.0);
    assert_eq!(inputs.market_price, 5000.0);
    assert_eq!(dash.outputs().valorized_material, 60.0);
    assert_eq!(dash.outputs().estimated_income, 300_000.0);
}

#[test]
fn test_out_of_domain_raw_inputs_are_clamped_not_computed() {
    let mut dash = TestDashboard::new();
    dash.set_raw_inputs(SimulationInputs::new(-120.0, 25.0, 0.8, 0.5, 10000.0));
    dash.tick(1);
    // -120 clamps to the 50 ton minimum.
    assert_eq!(dash.outputs().valorized_material, 12.5);
    assert!(dash.outputs().avoided_gei > 0.0);
}

#[test]
fn test_idle_frames_keep_outputs_stable() {
    let mut dash = TestDashboard::new().with_slider(ParameterId::LandfillEmissionFactor, 1.5);
    dash.tick(1);
    let first = dash.outputs();
    dash.tick(5);
    assert_eq!(dash.outputs(), first);
}

#[test]
fn test_moving_slider_back_restores_previous_projection() {
    let mut dash = TestDashboard::new();
    let original = dash.outputs();
    dash.set_slider(ParameterId::TransportEmissionFactor, 0.9);
    dash.tick(1);
    assert_ne!(dash.outputs(), original);
    dash.set_slider(ParameterId::TransportEmissionFactor, 0.5);
    dash.tick(1);
    assert_eq!(dash.outputs(), original);
}

// ---------------------------------------------------------------------------
// Baseline injection and charts
// ---------------------------------------------------------------------------

#[test]
fn test_custom_baseline_flows_into_headcounts_and_charts() {
    let baseline = BaselineConstants {
        base_gei: 50.0,
        trained_people: 10,
        ..BaselineConstants::default()
    };
    let mut dash = TestDashboard::new().with_baseline(baseline);
    dash.tick(1);
    assert_eq!(dash.outputs().trained_people, 10);
    let [gei, _, _] = dash.charts();
    assert_eq!(gei.values, [50.0, 96.0]);
    assert_eq!(gei.y_max, 96.0 * 1.15);
}

#[test]
fn test_chart_order_and_floors() {
    let dash = TestDashboard::new();
    let charts = dash.charts();
    let indicators: Vec<Indicator> = charts.iter().map(|c| c.indicator).collect();
    assert_eq!(
        indicators,
        vec![
            Indicator::AvoidedGei,
            Indicator::ValorizedMaterial,
            Indicator::EstimatedIncome
        ]
    );
    for chart in &charts {
        assert!(chart.y_max >= chart.indicator.axis_floor());
        assert_eq!(chart.labels(), ["Baseline", "Projection"]);
    }
}
