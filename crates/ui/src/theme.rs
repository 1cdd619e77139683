//! Light brand theme and the shared sizes/colours used by every panel.

use bevy_egui::{egui, EguiContexts};

use rendering::palette::{DARK_TEAL, MID_BLUE, NAVY, SKY_BLUE, VIBRANT_GREEN};

pub const FONT_TITLE: f32 = 28.0;
pub const FONT_HEADING: f32 = 20.0;
pub const FONT_SUBHEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CAPTION: f32 = 12.0;
pub const FONT_METRIC_VALUE: f32 = 24.0;

pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const SIDEBAR_WIDTH: f32 = 330.0;

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(30, 36, 40);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(105, 112, 118);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(NAVY.0, NAVY.1, NAVY.2);
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(DARK_TEAL.0, DARK_TEAL.1, DARK_TEAL.2);
pub const ACCENT: egui::Color32 =
    egui::Color32::from_rgb(VIBRANT_GREEN.0, VIBRANT_GREEN.1, VIBRANT_GREEN.2);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(20, 130, 60);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(190, 40, 40);

pub const PANEL_FILL: egui::Color32 = egui::Color32::WHITE;
pub const SIDEBAR_FILL: egui::Color32 = egui::Color32::from_rgb(240, 244, 246);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(246, 249, 250);

pub fn apply_brand_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let inactive = egui::Color32::from_rgb(225, 232, 236);
    let hover = egui::Color32::from_rgb(SKY_BLUE.0, SKY_BLUE.1, SKY_BLUE.2);
    let active = egui::Color32::from_rgb(MID_BLUE.0, MID_BLUE.1, MID_BLUE.2);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.active.weak_bg_fill = active;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);

    style.visuals.panel_fill = PANEL_FILL;
    style.visuals.window_fill = PANEL_FILL;
    style.visuals.faint_bg_color = CARD_FILL;

    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    style.visuals.slider_trailing_fill = true;

    let rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.noninteractive.corner_radius = rounding;
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    ctx.set_style(style);
}
