use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};

use super::canvas::Canvas;
use super::RasterError;

/// Physical resolution stored in the pHYs chunk. 300 DPI is 11811 px/m.
pub fn dots_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / 0.0254).round() as u32
}

/// Encode the canvas as an 8-bit RGBA PNG tagged with `dpi`.
pub fn encode_png(canvas: &Canvas, dpi: u32) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = Encoder::new(&mut bytes, canvas.width(), canvas.height());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let ppm = dots_per_meter(dpi);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.as_rgba())?;
        writer.finish()?;
    }
    Ok(bytes)
}
