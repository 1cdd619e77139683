use bevy::prelude::*;

use crate::palette::WHITE;

/// The dashboard is drawn entirely by egui; it only needs a 2D camera to
/// render into and a white clear colour behind the panels.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn clear_color() -> ClearColor {
    ClearColor(Color::srgb_u8(WHITE.0, WHITE.1, WHITE.2))
}
