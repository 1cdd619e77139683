//! CPU rasterizer for comparison charts, used for PNG export.
//!
//! The on-screen charts are drawn by egui; exports need a standalone image at a
//! fixed physical resolution, so the same chart is laid out again on an RGBA
//! canvas, cropped to its content and encoded with a pHYs chunk.

mod axis;
mod bar_chart;
mod canvas;
mod encode;
mod text;


pub use axis::nice_ticks;
pub use bar_chart::{draw_bar_chart, ChartLabels, FigureSpec};
pub use canvas::Canvas;
pub use encode::{dots_per_meter, encode_png};
pub use text::TextPainter;

use simulation::comparison::ComparisonSeries;

use crate::palette::ChartStyle;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("no usable font available for chart text")]
    MissingFont,
    #[error("font {name} could not be parsed")]
    InvalidFont { name: String },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Owns the parsed fonts so several charts can be rendered without reloading them.
pub struct ChartRasterizer {
    text: TextPainter,
    figure: FigureSpec,
}

impl ChartRasterizer {
    pub fn new(figure: FigureSpec) -> Result<Self, RasterError> {
        Ok(Self {
            text: TextPainter::from_egui_fonts()?,
            figure,
        })
    }

    pub fn figure(&self) -> &FigureSpec {
        &self.figure
    }

    /// Render the chart and crop it to its content plus padding.
    pub fn render(
        &self,
        series: &ComparisonSeries,
        labels: &ChartLabels,
        style: &ChartStyle,
    ) -> Canvas {
        let (width, height) = self.figure.pixels();
        let mut canvas = Canvas::new(width, height, style.background);
        draw_bar_chart(&mut canvas, &self.text, series, labels, style, &self.figure);
        canvas.crop_to_content(self.figure.pad_pixels())
    }

    pub fn render_png(
        &self,
        series: &ComparisonSeries,
        labels: &ChartLabels,
        style: &ChartStyle,
    ) -> Result<Vec<u8>, RasterError> {
        encode_png(&self.render(series, labels, style), self.figure.dpi)
    }
}

/// One-shot convenience wrapper around [`ChartRasterizer`].
pub fn render_chart_png(
    series: &ComparisonSeries,
    labels: &ChartLabels,
    style: &ChartStyle,
    figure: FigureSpec,
) -> Result<Vec<u8>, RasterError> {
    ChartRasterizer::new(figure)?.render_png(series, labels, style)
}
