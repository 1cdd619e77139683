use bevy::prelude::*;
use bevy_egui::egui;

use export::{ExportChartEvent, ExportOutcome, ExportStatus};
use simulation::comparison::Indicator;
use simulation::LocalizationState;

use crate::ui_widgets::{status_line, themed_button_primary};

/// Human-readable line for the last export, or `None` before the first one.
pub fn status_text(status: &ExportStatus, loc: &LocalizationState) -> Option<(String, bool)> {
    match status.last.as_ref()? {
        ExportOutcome::Saved { path, .. } => Some((
            format!("{} {}", loc.t("downloads.saved"), path.display()),
            true,
        )),
        ExportOutcome::Failed { message, .. } => Some((
            format!("{}: {message}", loc.t("downloads.failed")),
            false,
        )),
    }
}

/// Download button for one chart, labelled with the file it produces.
pub fn download_button(
    ui: &mut egui::Ui,
    indicator: Indicator,
    loc: &LocalizationState,
    requests: &mut EventWriter<ExportChartEvent>,
) {
    let text = format!(
        "{} {}",
        loc.t("downloads.button"),
        indicator.export_file_name()
    );
    if themed_button_primary(ui, &text).clicked() {
        requests.send(ExportChartEvent { indicator });
    }
}

pub fn export_status_line(ui: &mut egui::Ui, status: &ExportStatus, loc: &LocalizationState) {
    if let Some((text, ok)) = status_text(status, loc) {
        status_line(ui, &text, ok);
    }
}
