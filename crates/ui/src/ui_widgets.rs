//! Themed widget helpers shared by the dashboard panels.
//!
//! Wrap common egui patterns (headings, metric cards, captions, buttons) with
//! the sizes and colours from [`crate::theme`].

use bevy_egui::egui;

use crate::theme;

// =============================================================================
// Headings
// =============================================================================

pub fn themed_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_TITLE)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

/// Render a section heading with consistent font size and color.
pub fn themed_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_HEADING)
            .strong(),
    );
}

pub fn themed_subheading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SUBHEADING)
            .color(theme::TEXT_HEADING),
    );
}

pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_CAPTION)
            .color(theme::TEXT_MUTED),
    );
}

// =============================================================================
// Buttons
// =============================================================================

/// A primary (highlighted) button for the main action in a panel.
pub fn themed_button_primary(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(egui::Color32::WHITE),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

// =============================================================================
// Metric card
// =============================================================================

/// Label, large value and a muted caption, in a light framed box.
pub fn metric_card(ui: &mut egui::Ui, label: &str, value: &str, help: &str) {
    egui::Frame::new()
        .fill(theme::CARD_FILL)
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new(label)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_METRIC_VALUE)
                    .color(theme::TEXT)
                    .strong(),
            );
            caption(ui, help);
        });
}

/// Status line coloured by outcome.
pub fn status_line(ui: &mut egui::Ui, text: &str, ok: bool) {
    let color = if ok { theme::SUCCESS } else { theme::ERROR };
    ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(color));
}
