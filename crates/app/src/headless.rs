//! Headless export: `VALORIZA_HEADLESS_EXPORT=1` renders the three charts for
//! one scenario without opening a window, then prints a JSON summary to stdout.
//!
//! The scenario comes from the JSON file named by `VALORIZA_SCENARIO` (the five
//! `SimulationInputs` fields) or defaults to the slider defaults. Unlike the
//! sliders, scenario values are validated, not clamped.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Serialize;
use thiserror::Error;

use simulation::{
    BaselineConstants, DashboardSettings, InputError, LocalizationState, ProjectedOutputs,
    SimulationInputs,
};

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("could not read scenario {}: {source}", path.display())]
    ScenarioRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario {} is not valid JSON: {source}", path.display())]
    ScenarioParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid scenario: {0}")]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] export::ExportError),

    #[error("could not serialize summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Printed to stdout when the export succeeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub inputs: SimulationInputs,
    pub outputs: ProjectedOutputs,
    pub files: Vec<PathBuf>,
}

pub fn load_scenario(path: &Path) -> Result<SimulationInputs, HeadlessError> {
    let text = std::fs::read_to_string(path).map_err(|source| HeadlessError::ScenarioRead {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs: SimulationInputs =
        serde_json::from_str(&text).map_err(|source| HeadlessError::ScenarioParse {
            path: path.to_path_buf(),
            source,
        })?;
    inputs.validate()?;
    Ok(inputs)
}

/// Windowless app with the dashboard resources and the recompute system.
pub fn build_headless_app(settings: DashboardSettings, inputs: SimulationInputs) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(settings);
    app.add_plugins(simulation::SimulationPlugin);
    app.insert_resource(inputs);
    app
}

/// Run one frame for `inputs`, then export every chart.
pub fn run_export(
    settings: DashboardSettings,
    inputs: SimulationInputs,
) -> Result<ExportSummary, HeadlessError> {
    let mut app = build_headless_app(settings, inputs);
    app.update();

    let world = app.world();
    let outputs = *world.resource::<ProjectedOutputs>();
    let files = export::export_all(
        world.resource::<DashboardSettings>(),
        world.resource::<BaselineConstants>(),
        &outputs,
        world.resource::<LocalizationState>(),
    )?;

    Ok(ExportSummary {
        inputs: *world.resource::<SimulationInputs>(),
        outputs,
        files,
    })
}

fn export_and_summarize(
    settings: DashboardSettings,
    scenario: Option<&Path>,
) -> Result<String, HeadlessError> {
    let inputs = match scenario {
        Some(path) => load_scenario(path)?,
        None => SimulationInputs::default(),
    };
    let summary = run_export(settings, inputs)?;
    info!(
        "Headless export wrote {} charts to {}",
        summary.files.len(),
        summary
            .files
            .first()
            .and_then(|f| f.parent())
            .map(|d| d.display().to_string())
            .unwrap_or_default()
    );
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Entry point used by `main`. Returns the process exit code.
pub fn run_headless_export(settings: DashboardSettings, scenario: Option<&Path>) -> i32 {
    match export_and_summarize(settings, scenario) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(err) => {
            error!("Headless export failed: {err}");
            eprintln!("{err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("valoriza_headless_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn settings_for(dir: &Path) -> DashboardSettings {
        DashboardSettings {
            export_dir: dir.to_path_buf(),
            fetch_logos: false,
            export_dpi: 72,
            ..Default::default()
        }
    }

    #[test]
    fn test_load_scenario_accepts_in_domain_values() {
        let dir = test_dir("scenario_ok");
        let path = dir.join("scenario.json");
        fs::write(
            &path,
            r#"{"total_volume": 50, "recovery_rate_pct": 10.0, "landfill_emission_factor": 0.5,
                "transport_emission_factor": 0.1, "market_price": 5000}"#,
        )
        .unwrap();

        let inputs = load_scenario(&path).unwrap();
        assert_eq!(inputs, SimulationInputs::new(50.0, 10.0, 0.5, 0.1, 5000.0));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_scenario_rejects_out_of_domain_values() {
        let dir = test_dir("scenario_bad");
        let path = dir.join("scenario.json");
        fs::write(
            &path,
            r#"{"total_volume": -120, "recovery_rate_pct": 25.0, "landfill_emission_factor": 0.8,
                "transport_emission_factor": 0.5, "market_price": 10000}"#,
        )
        .unwrap();

        let err = load_scenario(&path).unwrap_err();
        assert!(matches!(err, HeadlessError::Input(InputError::OutOfRange { .. })));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_scenario_reports_missing_and_malformed_files() {
        let dir = test_dir("scenario_missing");
        assert!(matches!(
            load_scenario(&dir.join("nope.json")),
            Err(HeadlessError::ScenarioRead { .. })
        ));

        let path = dir.join("broken.json");
        fs::write(&path, "{ total_volume: ").unwrap();
        assert!(matches!(
            load_scenario(&path),
            Err(HeadlessError::ScenarioParse { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_export_writes_charts_for_scenario() {
        let dir = test_dir("run_export");
        let inputs = SimulationInputs::new(200.0, 50.0, 2.0, 1.0, 15000.0);

        let summary = run_export(settings_for(&dir), inputs).unwrap();

        assert_eq!(summary.inputs, inputs);
        assert_eq!(summary.outputs.valorized_material, 100.0);
        assert_eq!(summary.outputs.avoided_gei, 400.0);
        assert_eq!(summary.outputs.avoided_import_footprint, 100.0);
        assert_eq!(summary.outputs.estimated_income, 1_500_000.0);
        assert_eq!(summary.files.len(), 3);
        for file in &summary.files {
            let decoder = png::Decoder::new(fs::File::open(file).unwrap());
            let reader = decoder.read_info().unwrap();
            assert_eq!(reader.info().pixel_dims.map(|d| d.xppu), Some(2835));
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_summary_json_has_inputs_outputs_and_files() {
        let dir = test_dir("summary_json");
        let json = export_and_summarize(settings_for(&dir), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["inputs"]["total_volume"], 120.0);
        assert_eq!(value["outputs"]["estimated_income"], 300000.0);
        assert_eq!(value["outputs"]["trained_people"], 40);
        assert_eq!(value["files"].as_array().map(Vec::len), Some(3));
        assert!(value["files"][0]
            .as_str()
            .is_some_and(|f| f.ends_with("GEI_Evitados.png")));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failed_export_gives_exit_code_one() {
        let dir = test_dir("exit_code");
        let blocker = dir.join("file_not_dir");
        fs::write(&blocker, b"x").unwrap();
        assert_eq!(run_headless_export(settings_for(&blocker), None), 1);
        let _ = fs::remove_dir_all(&dir);
    }
}
