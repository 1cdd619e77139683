use bevy::prelude::*;

pub mod branding;
pub mod camera;
pub mod chart_raster;
pub mod palette;

pub use branding::{BrandingLogos, BrandingPlugin, LogoState};
pub use chart_raster::{ChartLabels, ChartRasterizer, FigureSpec, RasterError};
pub use palette::ChartStyle;

/// Windowed rendering: camera, background and logo loading.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(camera::clear_color())
            .add_systems(Startup, camera::setup_camera)
            .add_plugins(BrandingPlugin);
    }
}
