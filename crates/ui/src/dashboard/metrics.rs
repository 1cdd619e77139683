use bevy_egui::egui;

use simulation::formatting::{fmt_co2e, fmt_tons, fmt_usd};
use simulation::{LocalizationState, ProjectedOutputs};

use crate::ui_widgets::metric_card;

/// One metric card: localization keys plus the formatted value.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    pub label_key: &'static str,
    pub caption_key: &'static str,
    pub value: String,
}

fn entry(label_key: &'static str, caption_key: &'static str, value: String) -> MetricEntry {
    MetricEntry {
        label_key,
        caption_key,
        value,
    }
}

/// Cards grouped into rows of three, two and one.
pub fn metric_rows(outputs: &ProjectedOutputs) -> [Vec<MetricEntry>; 3] {
    [
        vec![
            entry(
                "metric.valorized",
                "metric.valorized.caption",
                fmt_tons(outputs.valorized_material),
            ),
            entry(
                "metric.avoided_gei",
                "metric.avoided_gei.caption",
                fmt_co2e(outputs.avoided_gei),
            ),
            entry(
                "metric.import_footprint",
                "metric.import_footprint.caption",
                fmt_co2e(outputs.avoided_import_footprint),
            ),
        ],
        vec![
            entry(
                "metric.income",
                "metric.income.caption",
                fmt_usd(outputs.estimated_income),
            ),
            entry(
                "metric.trained_people",
                "metric.trained_people.caption",
                outputs.trained_people.to_string(),
            ),
        ],
        vec![entry(
            "metric.symbiosis",
            "metric.symbiosis.caption",
            outputs.industrial_symbiosis_count.to_string(),
        )],
    ]
}

pub fn metrics_section(ui: &mut egui::Ui, outputs: &ProjectedOutputs, loc: &LocalizationState) {
    for row in metric_rows(outputs) {
        ui.columns(row.len(), |columns| {
            for (column, metric) in columns.iter_mut().zip(&row) {
                metric_card(
                    column,
                    loc.t(metric.label_key),
                    &metric.value,
                    loc.t(metric.caption_key),
                );
            }
        });
        ui.add_space(8.0);
    }
}
