//! Main dashboard panel: header, metric cards, charts, downloads, information
//! and footer. Runs after the projection is recomputed so every frame shows
//! the values for the current slider positions.

mod downloads;
mod footer;
mod metrics;


use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use export::{ExportChartEvent, ExportStatus};
use rendering::{BrandingLogos, ChartStyle};
use simulation::comparison::comparison_set;
use simulation::{BaselineConstants, LocalizationState, ProjectedOutputs};

pub use downloads::{download_button, export_status_line, status_text};
pub use footer::{error_message_key, footer, info_section, logo_views, LogoView};
pub use metrics::{metric_rows, metrics_section, MetricEntry};

use crate::charts::comparison_chart;
use crate::theme;
use crate::ui_widgets::{caption, themed_heading, themed_title};

const CHART_HEIGHT: f32 = 320.0;

pub fn dashboard_ui(
    mut contexts: EguiContexts,
    outputs: Res<ProjectedOutputs>,
    baseline: Res<BaselineConstants>,
    loc: Res<LocalizationState>,
    logos: Res<BrandingLogos>,
    status: Res<ExportStatus>,
    mut requests: EventWriter<ExportChartEvent>,
) {
    let logo_slots = logo_views(&logos, |handle| contexts.add_image(handle.clone_weak()));
    let charts = comparison_set(&baseline, &outputs);

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL_FILL)
                .inner_margin(egui::Margin::same(20)),
        )
        .show(contexts.ctx_mut(), |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                themed_title(ui, loc.t("app.title"));
                ui.label(
                    egui::RichText::new(loc.t("app.subtitle"))
                        .size(theme::FONT_SUBHEADING)
                        .color(theme::PRIMARY),
                );
                caption(ui, loc.t("app.intro"));
                ui.separator();

                themed_heading(ui, loc.t("results.header"));
                metrics_section(ui, &outputs, &loc);
                ui.separator();

                themed_heading(ui, loc.t("charts.header"));
                ui.columns(charts.len(), |columns| {
                    for (column, series) in columns.iter_mut().zip(&charts) {
                        let labels = export::chart_labels(series.indicator, &loc);
                        let style = ChartStyle::for_indicator(series.indicator);
                        let width = column.available_width();
                        comparison_chart(
                            column,
                            series,
                            &labels,
                            &style,
                            egui::vec2(width, CHART_HEIGHT),
                        );
                    }
                });
                ui.separator();

                themed_heading(ui, loc.t("downloads.header"));
                ui.columns(charts.len(), |columns| {
                    for (column, series) in columns.iter_mut().zip(&charts) {
                        download_button(column, series.indicator, &loc, &mut requests);
                    }
                });
                export_status_line(ui, &status, &loc);
                ui.separator();

                info_section(ui, &loc);
                ui.separator();
                footer(ui, &loc, &logo_slots);
            });
        });
}
