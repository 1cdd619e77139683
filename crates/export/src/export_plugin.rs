use std::path::PathBuf;

use bevy::prelude::*;

use rendering::ChartRasterizer;
use simulation::comparison::{ComparisonSeries, Indicator};
use simulation::{BaselineConstants, DashboardSet, DashboardSettings, LocalizationState, ProjectedOutputs};

use crate::chart_export::{export_chart, figure_for};
use crate::export_error::ExportError;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Request a PNG of one chart, rendered from the current projection.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportChartEvent {
    pub indicator: Indicator,
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Saved { indicator: Indicator, path: PathBuf },
    Failed { indicator: Indicator, message: String },
}

/// Result of the most recent export, shown under the download buttons.
#[derive(Resource, Debug, Clone, Default)]
pub struct ExportStatus {
    pub last: Option<ExportOutcome>,
    pub saved_count: u32,
}

/// Fonts are parsed on first use and kept for later exports.
#[derive(Resource, Default)]
pub struct RasterizerCache(Option<ChartRasterizer>);

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExportChartEvent>()
            .init_resource::<ExportStatus>()
            .init_resource::<RasterizerCache>()
            .add_systems(
                Update,
                handle_export_requests.after(DashboardSet::Compute),
            );
    }
}

fn rasterizer<'a>(
    cache: &'a mut RasterizerCache,
    settings: &DashboardSettings,
) -> Result<&'a ChartRasterizer, ExportError> {
    let rasterizer = match cache.0.take() {
        Some(rasterizer) => rasterizer,
        None => ChartRasterizer::new(figure_for(settings))?,
    };
    Ok(cache.0.insert(rasterizer))
}

/// Write the requested charts to the export directory and record the outcome.
pub fn handle_export_requests(
    mut events: EventReader<ExportChartEvent>,
    settings: Res<DashboardSettings>,
    baseline: Res<BaselineConstants>,
    outputs: Res<ProjectedOutputs>,
    loc: Res<LocalizationState>,
    mut cache: ResMut<RasterizerCache>,
    mut status: ResMut<ExportStatus>,
) {
    for event in events.read() {
        let indicator = event.indicator;
        let series = ComparisonSeries::for_indicator(indicator, &baseline, &outputs);
        let result = rasterizer(&mut cache, &settings)
            .and_then(|r| export_chart(r, &settings.export_dir, &series, &loc));

        let outcome = match result {
            Ok(path) => {
                info!("Exported {:?} chart to {}", indicator, path.display());
                status.saved_count += 1;
                ExportOutcome::Saved { indicator, path }
            }
            Err(err) => {
                error!("Failed to export {:?} chart: {err}", indicator);
                ExportOutcome::Failed {
                    indicator,
                    message: err.to_string(),
                }
            }
        };
        status.last = Some(outcome);
    }
}
