//! RGBA pixel buffer with the handful of primitives a bar chart needs.

use crate::palette::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Rgb,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&background.to_rgba());
        }
        Self {
            width,
            height,
            background,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x as i64, y as i64).map(|i| {
            [
                self.pixels[i],
                self.pixels[i + 1],
                self.pixels[i + 2],
                self.pixels[i + 3],
            ]
        })
    }

    /// Alpha-blend `color` over the pixel at (x, y). Out-of-bounds writes are dropped.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb, coverage: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let a = coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        for (channel, src) in [color.0, color.1, color.2].into_iter().enumerate() {
            let dst = self.pixels[i + channel] as f32;
            self.pixels[i + channel] = (dst + (src as f32 - dst) * a).round() as u8;
        }
        self.pixels[i + 3] = 255;
    }

    /// Fill the axis-aligned rectangle `[x0, x1) x [y0, y1)` (pixel coordinates).
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        let (x0, x1) = (x0.min(x1).round() as i64, x0.max(x1).round() as i64);
        let (y0, y1) = (y0.min(y1).round() as i64, y0.max(y1).round() as i64);
        for y in y0.max(0)..y1.min(self.height as i64) {
            for x in x0.max(0)..x1.min(self.width as i64) {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    /// Horizontal line of the given thickness centred on `y`.
    pub fn hline(&mut self, x0: f32, x1: f32, y: f32, thickness: f32, color: Rgb) {
        let half = (thickness / 2.0).max(0.5);
        self.fill_rect(x0, y - half, x1, y + half, color);
    }

    /// Vertical line of the given thickness centred on `x`.
    pub fn vline(&mut self, x: f32, y0: f32, y1: f32, thickness: f32, color: Rgb) {
        let half = (thickness / 2.0).max(0.5);
        self.fill_rect(x - half, y0, x + half, y1, color);
    }

    /// Bounding box `(x0, y0, x1, y1)`, inclusive, of every non-background pixel.
    pub fn content_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let bg = self.background.to_rgba();
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let i = (y as usize * self.width as usize + x as usize) * 4;
                if self.pixels[i..i + 4] == bg {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    /// Crop to the content bounding box plus `pad` pixels of background on each side.
    ///
    /// An empty canvas is returned unchanged.
    pub fn crop_to_content(&self, pad: u32) -> Canvas {
        let Some((x0, y0, x1, y1)) = self.content_bounds() else {
            return self.clone();
        };
        let width = x1 - x0 + 1 + 2 * pad;
        let height = y1 - y0 + 1 + 2 * pad;
        let mut out = Canvas::new(width, height, self.background);
        let row_bytes = (x1 - x0 + 1) as usize * 4;
        for y in y0..=y1 {
            let src = (y as usize * self.width as usize + x0 as usize) * 4;
            let dst_y = (y - y0 + pad) as usize;
            let dst = (dst_y * width as usize + pad as usize) * 4;
            out.pixels[dst..dst + row_bytes].copy_from_slice(&self.pixels[src..src + row_bytes]);
        }
        out
    }
}
