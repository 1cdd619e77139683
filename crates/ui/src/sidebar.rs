//! Parameter sidebar: five sliders, language selector, reset and version footer.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::APP_VERSION;
use simulation::parameters::{ParameterId, ParameterSpec};
use simulation::{LocalizationState, SimulationInputs};

use crate::theme;
use crate::ui_widgets::{caption, themed_heading};

/// Text shown next to a slider handle.
pub fn slider_text(spec: &ParameterSpec, value: f64) -> String {
    match spec.id {
        ParameterId::RecoveryRatePct => format!("{:.1}%", value),
        _ => format!("{:.*}", spec.decimals(), value),
    }
}

/// Draw one slider and return the snapped value if the user moved it.
fn parameter_slider(
    ui: &mut egui::Ui,
    loc: &LocalizationState,
    spec: &ParameterSpec,
    current: f64,
) -> Option<f64> {
    let key = spec.id.label_key();
    let help = loc.t(&format!("{key}.help")).to_string();
    ui.label(egui::RichText::new(loc.t(key)).size(theme::FONT_BODY))
        .on_hover_text(help.as_str());

    let mut value = current;
    let decimals = spec.decimals();
    let id = spec.id;
    let response = ui
        .add(
            egui::Slider::new(&mut value, spec.min..=spec.max)
                .step_by(spec.step)
                .max_decimals(decimals)
                .custom_formatter(move |v, _| slider_text(id.spec(), v))
                .custom_parser(|text| text.trim().trim_end_matches('%').trim().parse().ok()),
        )
        .on_hover_text(help);
    ui.add_space(6.0);

    if response.changed() {
        Some(spec.snap(value))
    } else {
        None
    }
}

/// Left panel. Writes to [`SimulationInputs`] only when a slider actually
/// moves, so the projection is not recomputed on idle frames.
pub fn sidebar_ui(
    mut contexts: EguiContexts,
    mut inputs: ResMut<SimulationInputs>,
    mut loc: ResMut<LocalizationState>,
) {
    egui::SidePanel::left("parameters")
        .exact_width(theme::SIDEBAR_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(theme::SIDEBAR_FILL)
                .inner_margin(egui::Margin::same(14)),
        )
        .show(contexts.ctx_mut(), |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                themed_heading(ui, loc.t("sidebar.header"));
                ui.add_space(8.0);

                for id in ParameterId::ALL {
                    let current = inputs.get(id);
                    if let Some(value) = parameter_slider(ui, &loc, id.spec(), current) {
                        if value != current {
                            inputs.set_clamped(id, value);
                        }
                    }
                }

                if ui.button(loc.t("sidebar.reset")).clicked() {
                    inputs.set_if_neq(SimulationInputs::default());
                }

                ui.separator();
                if let Some(code) = language_selector(ui, &loc) {
                    loc.set_locale(&code);
                }

                ui.separator();
                caption(
                    ui,
                    &format!("{}: {}", loc.t("sidebar.version"), APP_VERSION),
                );
                caption(ui, loc.t("sidebar.built_with"));
            });
        });
}

/// Returns the newly picked locale code, if any.
fn language_selector(ui: &mut egui::Ui, loc: &LocalizationState) -> Option<String> {
    let mut selected = loc.active_locale.clone();
    ui.horizontal(|ui| {
        ui.label(loc.t("sidebar.language"));
        egui::ComboBox::from_id_salt("language")
            .selected_text(loc.active_locale_name())
            .show_ui(ui, |ui| {
                for (code, name) in loc.available_locales() {
                    ui.selectable_value(&mut selected, code.to_string(), name);
                }
            });
    });
    (selected != loc.active_locale).then_some(selected)
}
