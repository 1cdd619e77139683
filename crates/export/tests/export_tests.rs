use std::fs;
use std::path::PathBuf;

use export::{export_all, export_path, ExportChartEvent, ExportOutcome, ExportPlugin, ExportStatus};
use simulation::comparison::Indicator;
use simulation::parameters::ParameterId;
use simulation::test_harness::TestDashboard;
use simulation::{BaselineConstants, DashboardSettings, LocalizationState, SimulationInputs};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("valoriza_export_test_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Low DPI keeps the rasterizer fast; file naming and tagging are DPI-independent.
fn settings_for(dir: &PathBuf, dpi: u32) -> DashboardSettings {
    DashboardSettings {
        export_dir: dir.clone(),
        fetch_logos: false,
        export_dpi: dpi,
        ..Default::default()
    }
}

fn pixel_dims(path: &PathBuf) -> (u32, u32, Option<png::PixelDimensions>) {
    let file = fs::File::open(path).unwrap();
    let reader = png::Decoder::new(file).read_info().unwrap();
    let info = reader.info();
    (info.width, info.height, info.pixel_dims)
}

fn export_app(settings: DashboardSettings) -> TestDashboard {
    TestDashboard::build(settings, |app| {
        app.add_plugins(ExportPlugin);
    })
}

#[test]
fn export_all_writes_three_named_files_at_300_dpi() {
    let dir = test_dir("all");
    let settings = settings_for(&dir, 300);
    let baseline = BaselineConstants::default();
    let outputs = simulation::evaluate(&SimulationInputs::default(), &baseline);

    let files = export_all(&settings, &baseline, &outputs, &LocalizationState::default()).unwrap();

    assert_eq!(
        files,
        vec![
            dir.join("GEI_Evitados.png"),
            dir.join("Material_Valorizado.png"),
            dir.join("Ingresos_Estimados.png"),
        ]
    );
    for file in &files {
        let (w, h, dims) = pixel_dims(file);
        assert!(w < 2400 && h < 1800, "{} is not cropped", file.display());
        let dims = dims.expect("pHYs chunk");
        assert_eq!((dims.xppu, dims.yppu), (11811, 11811));
        assert_eq!(dims.unit, png::Unit::Meter);
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_file_names_ignore_locale() {
    let dir = PathBuf::from("out");
    assert_eq!(
        export_path(&dir, Indicator::EstimatedIncome),
        PathBuf::from("out/Ingresos_Estimados.png")
    );

    let mut loc = LocalizationState::default();
    loc.set_locale("en");
    let labels = export::chart_labels(Indicator::EstimatedIncome, &loc);
    assert_eq!(labels.title, "Estimated Income");
    assert_eq!(labels.series, ["Baseline".to_string(), "Projection".to_string()]);
}

#[test]
fn spanish_labels_are_used_by_default() {
    let labels = export::chart_labels(Indicator::ValorizedMaterial, &LocalizationState::default());
    assert_eq!(labels.title, "Material Valorizado");
    assert_eq!(labels.y_label, "Toneladas/año");
    assert_eq!(labels.series, ["Línea Base".to_string(), "Proyección".to_string()]);
}

#[test]
fn export_event_writes_file_and_records_status() {
    let dir = test_dir("event");
    let mut dashboard = export_app(settings_for(&dir, 72)).with_slider(ParameterId::TotalVolume, 200.0);

    dashboard
        .app_mut()
        .world_mut()
        .send_event(ExportChartEvent {
            indicator: Indicator::AvoidedGei,
        });
    dashboard.tick(1);

    let path = dir.join("GEI_Evitados.png");
    assert!(path.exists());
    let (_, _, dims) = pixel_dims(&path);
    assert_eq!(dims.map(|d| d.xppu), Some(2835));

    let status = dashboard.app_mut().world().resource::<ExportStatus>().clone();
    assert_eq!(status.saved_count, 1);
    assert_eq!(
        status.last,
        Some(ExportOutcome::Saved {
            indicator: Indicator::AvoidedGei,
            path,
        })
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_directory_reports_failure() {
    let dir = test_dir("blocked");
    // A regular file where the export directory should be.
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, b"x").unwrap();
    let mut dashboard = export_app(settings_for(&blocker, 72));

    dashboard
        .app_mut()
        .world_mut()
        .send_event(ExportChartEvent {
            indicator: Indicator::EstimatedIncome,
        });
    dashboard.tick(1);

    let status = dashboard.app_mut().world().resource::<ExportStatus>().clone();
    assert_eq!(status.saved_count, 0);
    match status.last {
        Some(ExportOutcome::Failed { indicator, message }) => {
            assert_eq!(indicator, Indicator::EstimatedIncome);
            assert!(message.contains("Ingresos_Estimados.png"), "{message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn no_event_means_no_file() {
    let dir = test_dir("idle");
    let mut dashboard = export_app(settings_for(&dir, 72));
    dashboard.tick(3);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    assert!(dashboard.app_mut().world().resource::<ExportStatus>().last.is_none());
    let _ = fs::remove_dir_all(&dir);
}
