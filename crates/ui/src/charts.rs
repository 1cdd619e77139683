//! On-screen comparison bar charts, drawn with the egui painter.
//!
//! Mirrors the exported PNG layout: two bars, value labels above each bar,
//! left and bottom spines only, rotated unit label on the Y axis.

use std::f32::consts::FRAC_PI_2;

use bevy_egui::egui::{self, epaint, Align2, FontId, Pos2, Rect, Stroke};

use rendering::chart_raster::nice_ticks;
use rendering::palette::SPINE;
use rendering::{ChartLabels, ChartStyle};
use simulation::comparison::ComparisonSeries;
use simulation::formatting::{fmt_axis_tick, fmt_bar_value};

const BAR_WIDTH: f32 = 0.6;
const X_RANGE: (f32, f32) = (-0.38, 1.38);
const ANNOTATION_LIFT: f64 = 1.05;

const TITLE_SIZE: f32 = 15.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const TITLE_BAND: f32 = 40.0;
const X_LABEL_BAND: f32 = 28.0;
const Y_LABEL_BAND: f32 = 22.0;
const TICK_LENGTH: f32 = 4.0;

/// Width reserved left of the axes for tick labels.
fn tick_label_band(painter: &egui::Painter, labels: &[String]) -> f32 {
    labels
        .iter()
        .map(|text| {
            painter
                .layout_no_wrap(text.clone(), FontId::proportional(TICK_SIZE), SPINE.to_color32())
                .size()
                .x
        })
        .fold(0.0, f32::max)
        + TICK_LENGTH
        + 4.0
}

pub fn comparison_chart(
    ui: &mut egui::Ui,
    series: &ComparisonSeries,
    labels: &ChartLabels,
    style: &ChartStyle,
    size: egui::Vec2,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, style.background.to_color32());

    let (step, ticks) = nice_ticks(series.y_max, 5);
    let tick_labels: Vec<String> = ticks.iter().map(|t| fmt_axis_tick(*t, step)).collect();
    let left_band = Y_LABEL_BAND + tick_label_band(&painter, &tick_labels);

    let axes = Rect::from_min_max(
        Pos2::new(rect.left() + left_band, rect.top() + TITLE_BAND),
        Pos2::new(rect.right() - 8.0, rect.bottom() - X_LABEL_BAND),
    );
    if axes.width() <= 0.0 || axes.height() <= 0.0 {
        return response;
    }

    let x_of = |data_x: f32| {
        axes.left() + (data_x - X_RANGE.0) / (X_RANGE.1 - X_RANGE.0) * axes.width()
    };
    let y_of = |value: f64| {
        let t = if series.y_max > 0.0 { (value / series.y_max) as f32 } else { 0.0 };
        axes.bottom() - t * axes.height()
    };
    let spine = Stroke::new(1.0, SPINE.to_color32());

    painter.text(
        Pos2::new(axes.center().x, rect.top() + 6.0),
        Align2::CENTER_TOP,
        &labels.title,
        FontId::proportional(TITLE_SIZE),
        style.title_color.to_color32(),
    );

    for (tick, text) in ticks.iter().zip(&tick_labels) {
        let y = y_of(*tick);
        painter.line_segment(
            [Pos2::new(axes.left() - TICK_LENGTH, y), Pos2::new(axes.left(), y)],
            spine,
        );
        painter.text(
            Pos2::new(axes.left() - TICK_LENGTH - 2.0, y),
            Align2::RIGHT_CENTER,
            text,
            FontId::proportional(TICK_SIZE),
            SPINE.to_color32(),
        );
    }

    for (i, value) in series.values.iter().copied().enumerate() {
        let center = i as f32;
        let bar = Rect::from_min_max(
            Pos2::new(x_of(center - BAR_WIDTH / 2.0), y_of(value)),
            Pos2::new(x_of(center + BAR_WIDTH / 2.0), axes.bottom()),
        );
        painter.rect_filled(bar, 0.0, style.bar_colors[i].to_color32());
        painter.text(
            Pos2::new(x_of(center), y_of(value * ANNOTATION_LIFT)),
            Align2::CENTER_BOTTOM,
            fmt_bar_value(series.indicator, value),
            FontId::proportional(TICK_SIZE),
            style.annotation_color.to_color32(),
        );
        painter.text(
            Pos2::new(x_of(center), axes.bottom() + TICK_LENGTH + 2.0),
            Align2::CENTER_TOP,
            &labels.series[i],
            FontId::proportional(TICK_SIZE),
            style.tick_color.to_color32(),
        );
    }

    painter.line_segment([axes.left_top(), axes.left_bottom()], spine);
    painter.line_segment([axes.left_bottom(), axes.right_bottom()], spine);

    let galley = painter.layout_no_wrap(
        labels.y_label.clone(),
        FontId::proportional(LABEL_SIZE),
        style.axis_label_color.to_color32(),
    );
    let anchor = Pos2::new(
        rect.left() + (Y_LABEL_BAND - galley.size().y) / 2.0,
        axes.center().y + galley.size().x / 2.0,
    );
    painter.add(
        epaint::TextShape::new(anchor, galley, style.axis_label_color.to_color32())
            .with_angle(-FRAC_PI_2),
    );

    response
}
