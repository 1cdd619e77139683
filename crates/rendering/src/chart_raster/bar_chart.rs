//! Layout of a two-bar comparison chart on a fixed-size figure.
//!
//! Sizes are given in typographic points and scaled by the figure DPI, so the
//! same chart renders proportionally at any resolution. The axes occupy the
//! usual subplot fraction of the figure; everything outside the drawn content
//! is removed by the tight crop afterwards.

use bevy_egui::egui::Align2;

use simulation::comparison::ComparisonSeries;
use simulation::config::{EXPORT_DPI, FIGURE_SIZE_IN, TIGHT_BBOX_PAD_IN};
use simulation::formatting::{fmt_axis_tick, fmt_bar_value};

use super::axis::nice_ticks;
use super::canvas::Canvas;
use super::text::TextPainter;
use crate::palette::{ChartStyle, SPINE};

const TITLE_PT: f32 = 14.0;
const AXIS_LABEL_PT: f32 = 12.0;
const TICK_LABEL_PT: f32 = 10.0;
const ANNOTATION_PT: f32 = 10.0;
const TITLE_PAD_PT: f32 = 20.0;
const TICK_LENGTH_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const AXIS_LABEL_PAD_PT: f32 = 4.0;
const LINE_WIDTH_PT: f32 = 0.8;

/// Axes rectangle as fractions of the figure (left, right, top, bottom).
const AXES_LEFT: f32 = 0.125;
const AXES_RIGHT: f32 = 0.9;
const AXES_TOP: f32 = 0.12;
const AXES_BOTTOM: f32 = 0.89;

const BAR_WIDTH: f64 = 0.6;
/// Two bars centred on 0 and 1 with a 5% data margin either side.
const X_RANGE: (f64, f64) = (-0.38, 1.38);
/// Annotations sit this far above the bar top, relative to its height.
const ANNOTATION_LIFT: f64 = 1.05;
const TARGET_TICKS: usize = 6;

/// Text drawn around the chart, already translated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub y_label: String,
    /// `[baseline, projection]` tick labels.
    pub series: [String; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSpec {
    pub dpi: u32,
    /// Width and height in inches.
    pub size_in: (f32, f32),
    /// Padding kept around the content by the tight crop, in inches.
    pub pad_in: f32,
}

impl Default for FigureSpec {
    fn default() -> Self {
        Self {
            dpi: EXPORT_DPI,
            size_in: FIGURE_SIZE_IN,
            pad_in: TIGHT_BBOX_PAD_IN,
        }
    }
}

impl FigureSpec {
    pub fn with_dpi(dpi: u32) -> Self {
        Self {
            dpi,
            ..Self::default()
        }
    }

    /// Points to pixels.
    pub fn pt(&self, points: f32) -> f32 {
        points * self.dpi as f32 / 72.0
    }

    pub fn pixels(&self) -> (u32, u32) {
        let dpi = self.dpi as f32;
        (
            (self.size_in.0 * dpi).round() as u32,
            (self.size_in.1 * dpi).round() as u32,
        )
    }

    pub fn pad_pixels(&self) -> u32 {
        (self.pad_in * self.dpi as f32).round() as u32
    }
}

/// Pixel geometry of the axes area.
struct Axes {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    y_max: f64,
}

impl Axes {
    fn new(width: u32, height: u32, y_max: f64) -> Self {
        Self {
            left: width as f32 * AXES_LEFT,
            right: width as f32 * AXES_RIGHT,
            top: height as f32 * AXES_TOP,
            bottom: height as f32 * AXES_BOTTOM,
            y_max,
        }
    }

    fn x(&self, data_x: f64) -> f32 {
        let t = (data_x - X_RANGE.0) / (X_RANGE.1 - X_RANGE.0);
        self.left + t as f32 * (self.right - self.left)
    }

    fn y(&self, value: f64) -> f32 {
        let t = if self.y_max > 0.0 { value / self.y_max } else { 0.0 };
        self.bottom - t as f32 * (self.bottom - self.top)
    }

    fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Draw the full chart onto a figure-sized canvas.
pub fn draw_bar_chart(
    canvas: &mut Canvas,
    text: &TextPainter,
    series: &ComparisonSeries,
    labels: &ChartLabels,
    style: &ChartStyle,
    figure: &FigureSpec,
) {
    let axes = Axes::new(canvas.width(), canvas.height(), series.y_max);
    let line = figure.pt(LINE_WIDTH_PT);
    let tick_len = figure.pt(TICK_LENGTH_PT);
    let tick_pad = figure.pt(TICK_PAD_PT);

    for (i, value) in series.values.iter().copied().enumerate() {
        let center = i as f64;
        if value > 0.0 {
            canvas.fill_rect(
                axes.x(center - BAR_WIDTH / 2.0),
                axes.y(value),
                axes.x(center + BAR_WIDTH / 2.0),
                axes.bottom,
                style.bar_colors[i],
            );
        }
        text.draw(
            canvas,
            &fmt_bar_value(series.indicator, value),
            figure.pt(ANNOTATION_PT),
            (axes.x(center), axes.y(value * ANNOTATION_LIFT)),
            Align2::CENTER_BOTTOM,
            style.annotation_color,
        );

        let x = axes.x(center);
        canvas.vline(x, axes.bottom, axes.bottom + tick_len, line, SPINE);
        text.draw(
            canvas,
            &labels.series[i],
            figure.pt(TICK_LABEL_PT),
            (x, axes.bottom + tick_len + tick_pad),
            Align2::CENTER_TOP,
            style.tick_color,
        );
    }

    let (step, ticks) = nice_ticks(series.y_max, TARGET_TICKS);
    let mut widest_tick = 0.0f32;
    for tick in ticks {
        let y = axes.y(tick);
        canvas.hline(axes.left - tick_len, axes.left, y, line, SPINE);
        let label = fmt_axis_tick(tick, step);
        let (w, _) = text.measure(&label, figure.pt(TICK_LABEL_PT));
        widest_tick = widest_tick.max(w);
        text.draw(
            canvas,
            &label,
            figure.pt(TICK_LABEL_PT),
            (axes.left - tick_len - tick_pad, y),
            Align2::RIGHT_CENTER,
            SPINE,
        );
    }

    // Left and bottom spines only.
    canvas.vline(axes.left, axes.top, axes.bottom + line / 2.0, line, SPINE);
    canvas.hline(axes.left - line / 2.0, axes.right, axes.bottom, line, SPINE);

    text.draw_vertical(
        canvas,
        &labels.y_label,
        figure.pt(AXIS_LABEL_PT),
        (
            axes.left - tick_len - tick_pad - widest_tick - figure.pt(AXIS_LABEL_PAD_PT),
            axes.center_y(),
        ),
        Align2::RIGHT_CENTER,
        style.axis_label_color,
    );

    text.draw(
        canvas,
        &labels.title,
        figure.pt(TITLE_PT),
        (axes.center_x(), axes.top - figure.pt(TITLE_PAD_PT)),
        Align2::CENTER_BOTTOM,
        style.title_color,
    );
}
