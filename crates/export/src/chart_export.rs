//! Render comparison charts and write them as `{prefix}.png` files.

use std::path::{Path, PathBuf};

use rendering::{ChartLabels, ChartRasterizer, ChartStyle, FigureSpec};
use simulation::comparison::{comparison_set, ComparisonSeries, Indicator, SERIES_LABEL_KEYS};
use simulation::{BaselineConstants, DashboardSettings, LocalizationState, ProjectedOutputs};

use crate::atomic_write::atomic_write;
use crate::export_error::ExportError;

/// Translated title, axis label and bar labels for `indicator`.
pub fn chart_labels(indicator: Indicator, loc: &LocalizationState) -> ChartLabels {
    ChartLabels {
        title: loc.t(indicator.title_key()).to_string(),
        y_label: loc.t(indicator.unit_key()).to_string(),
        series: SERIES_LABEL_KEYS.map(|key| loc.t(key).to_string()),
    }
}

/// File names do not depend on the active locale.
pub fn export_path(dir: &Path, indicator: Indicator) -> PathBuf {
    dir.join(indicator.export_file_name())
}

pub fn figure_for(settings: &DashboardSettings) -> FigureSpec {
    FigureSpec::with_dpi(settings.export_dpi)
}

/// Rasterize one chart and write it into `dir`. Returns the written path.
pub fn export_chart(
    rasterizer: &ChartRasterizer,
    dir: &Path,
    series: &ComparisonSeries,
    loc: &LocalizationState,
) -> Result<PathBuf, ExportError> {
    let labels = chart_labels(series.indicator, loc);
    let style = ChartStyle::for_indicator(series.indicator);
    let bytes = rasterizer.render_png(series, &labels, &style)?;

    let path = export_path(dir, series.indicator);
    atomic_write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Export all three charts in on-screen order. Stops at the first failure.
pub fn export_all(
    settings: &DashboardSettings,
    baseline: &BaselineConstants,
    outputs: &ProjectedOutputs,
    loc: &LocalizationState,
) -> Result<Vec<PathBuf>, ExportError> {
    let rasterizer = ChartRasterizer::new(figure_for(settings))?;
    comparison_set(baseline, outputs)
        .iter()
        .map(|series| export_chart(&rasterizer, &settings.export_dir, series, loc))
        .collect()
}
