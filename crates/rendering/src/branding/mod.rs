//! Best-effort download of the partner logos shown in the footer.
//!
//! Each logo is fetched once on the IO task pool. A failed fetch or decode is
//! kept in its slot and shown as an inline message; the dashboard never waits
//! on the network.

mod fetch;
mod systems;


pub use fetch::{
    build_agent, decode_logo, fetch_logo, fetch_logo_bytes, sniff_image_format, BrandingError,
    MAX_LOGO_BYTES,
};
pub use systems::{
    poll_logo_fetches, start_logo_fetches, BrandingLogos, LogoFetchTask, LogoSlot, LogoState,
};

use bevy::prelude::*;

use simulation::config::LOGO_DISPLAY_WIDTH;

/// On-screen size of a logo: fixed width, height from the aspect ratio.
pub fn logo_display_size(native: UVec2) -> Vec2 {
    if native.x == 0 {
        return Vec2::new(LOGO_DISPLAY_WIDTH, LOGO_DISPLAY_WIDTH);
    }
    Vec2::new(
        LOGO_DISPLAY_WIDTH,
        LOGO_DISPLAY_WIDTH * native.y as f32 / native.x as f32,
    )
}

pub struct BrandingPlugin;

impl Plugin for BrandingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BrandingLogos>()
            .add_systems(Startup, start_logo_fetches)
            .add_systems(Update, poll_logo_fetches);
    }
}
