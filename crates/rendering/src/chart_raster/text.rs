//! Glyph rasterization with the fonts egui bundles, so exported charts use the
//! same typeface as the on-screen dashboard.

use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use bevy_egui::egui;

use super::canvas::Canvas;
use super::RasterError;
use crate::palette::Rgb;

/// Coverage mask of a single line of text, top-left at the origin.
#[derive(Debug, Clone)]
pub struct TextMask {
    pub width: u32,
    pub height: u32,
    coverage: Vec<f32>,
}

impl TextMask {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0.0; width as usize * height as usize],
        }
    }

    fn accumulate(&mut self, x: i64, y: i64, c: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        self.coverage[i] = (self.coverage[i] + c).min(1.0);
    }

    pub fn at(&self, x: u32, y: u32) -> f32 {
        self.coverage[y as usize * self.width as usize + x as usize]
    }
}

struct PlacedGlyph {
    font: usize,
    glyph: Glyph,
}

pub struct TextPainter {
    /// Fallback chain: a character missing from one font is taken from the next.
    fonts: Vec<FontArc>,
}

impl TextPainter {
    /// Load egui's proportional family followed by its monospace family.
    pub fn from_egui_fonts() -> Result<Self, RasterError> {
        let definitions = egui::FontDefinitions::default();
        let mut names: Vec<String> = Vec::new();
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            for name in definitions.families.get(&family).into_iter().flatten() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }

        let mut fonts = Vec::with_capacity(names.len());
        for name in names {
            let Some(data) = definitions.font_data.get(&name) else {
                continue;
            };
            let font = FontArc::try_from_vec(data.font.to_vec())
                .map_err(|_| RasterError::InvalidFont { name: name.clone() })?;
            fonts.push(font);
        }

        if fonts.is_empty() {
            return Err(RasterError::MissingFont);
        }
        Ok(Self { fonts })
    }

    fn font_for(&self, c: char) -> usize {
        self.fonts
            .iter()
            .position(|font| font.glyph_id(c).0 != 0)
            .unwrap_or(0)
    }

    fn line_metrics(&self, px: f32) -> (f32, f32) {
        let primary = self.fonts[0].as_scaled(PxScale::from(px));
        (primary.ascent(), primary.descent())
    }

    /// Lay out `text` on one line with the baseline at `ascent`. Returns the
    /// glyphs and the advance width.
    fn layout(&self, text: &str, px: f32) -> (Vec<PlacedGlyph>, f32) {
        let scale = PxScale::from(px);
        let (ascent, _) = self.line_metrics(px);
        let mut placed = Vec::with_capacity(text.len());
        let mut pen = 0.0f32;
        let mut previous: Option<(usize, ab_glyph::GlyphId)> = None;

        for c in text.chars() {
            let font_index = self.font_for(c);
            let scaled = self.fonts[font_index].as_scaled(scale);
            let id = scaled.glyph_id(c);
            if let Some((prev_font, prev_id)) = previous {
                if prev_font == font_index {
                    pen += scaled.kern(prev_id, id);
                }
            }
            placed.push(PlacedGlyph {
                font: font_index,
                glyph: id.with_scale_and_position(scale, point(pen, ascent)),
            });
            pen += scaled.h_advance(id);
            previous = Some((font_index, id));
        }
        (placed, pen)
    }

    /// `(width, height)` of the line box in pixels.
    pub fn measure(&self, text: &str, px: f32) -> (f32, f32) {
        let (_, width) = self.layout(text, px);
        let (ascent, descent) = self.line_metrics(px);
        (width, ascent - descent)
    }

    pub fn rasterize(&self, text: &str, px: f32) -> TextMask {
        let (glyphs, width) = self.layout(text, px);
        let (ascent, descent) = self.line_metrics(px);
        let mut mask = TextMask::new(
            width.ceil().max(1.0) as u32 + 1,
            (ascent - descent).ceil().max(1.0) as u32 + 1,
        );
        for placed in glyphs {
            let Some(outline) = self.fonts[placed.font].outline_glyph(placed.glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            let (ox, oy) = (bounds.min.x.floor() as i64, bounds.min.y.floor() as i64);
            outline.draw(|gx, gy, c| mask.accumulate(ox + gx as i64, oy + gy as i64, c));
        }
        mask
    }

    /// Draw a horizontal line of text anchored at `pos` per `align`.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        px: f32,
        pos: (f32, f32),
        align: egui::Align2,
        color: Rgb,
    ) {
        let mask = self.rasterize(text, px);
        let rect = align.anchor_size(
            egui::pos2(pos.0, pos.1),
            egui::vec2(mask.width as f32, mask.height as f32),
        );
        let (left, top) = (rect.min.x.round() as i64, rect.min.y.round() as i64);
        for y in 0..mask.height {
            for x in 0..mask.width {
                canvas.blend(left + x as i64, top + y as i64, color, mask.at(x, y));
            }
        }
    }

    /// Draw text rotated a quarter turn counter-clockwise, reading bottom to top.
    /// `align` applies to the rotated box.
    pub fn draw_vertical(
        &self,
        canvas: &mut Canvas,
        text: &str,
        px: f32,
        pos: (f32, f32),
        align: egui::Align2,
        color: Rgb,
    ) {
        let mask = self.rasterize(text, px);
        let rect = align.anchor_size(
            egui::pos2(pos.0, pos.1),
            egui::vec2(mask.height as f32, mask.width as f32),
        );
        let (left, top) = (rect.min.x.round() as i64, rect.min.y.round() as i64);
        for my in 0..mask.height {
            for mx in 0..mask.width {
                let x = left + my as i64;
                let y = top + (mask.width - 1 - mx) as i64;
                canvas.blend(x, y, color, mask.at(mx, my));
            }
        }
    }
}
