use bevy::prelude::{Handle, Image};
use bevy_egui::egui;

use rendering::branding::{logo_display_size, BrandingError, BrandingLogos, LogoState};
use simulation::LocalizationState;

use crate::theme;
use crate::ui_widgets::{caption, themed_heading, themed_subheading};

/// What to draw for one logo slot this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoView {
    Image {
        texture: egui::TextureId,
        size: egui::Vec2,
    },
    Loading,
    Error {
        message_key: &'static str,
        detail: String,
    },
    Hidden,
}

pub fn error_message_key(err: &BrandingError) -> &'static str {
    if err.is_network() {
        "logos.fetch_error"
    } else {
        "logos.decode_error"
    }
}

/// Resolve every slot, registering ready images with egui through `texture_for`.
pub fn logo_views(
    logos: &BrandingLogos,
    mut texture_for: impl FnMut(&Handle<Image>) -> egui::TextureId,
) -> Vec<LogoView> {
    logos
        .slots
        .iter()
        .map(|slot| match &slot.state {
            LogoState::Ready { handle, size } => {
                let display = logo_display_size(*size);
                LogoView::Image {
                    texture: texture_for(handle),
                    size: egui::vec2(display.x, display.y),
                }
            }
            LogoState::Pending => LogoView::Loading,
            LogoState::Failed(err) => LogoView::Error {
                message_key: error_message_key(err),
                detail: err.to_string(),
            },
            LogoState::Skipped => LogoView::Hidden,
        })
        .collect()
}

pub fn info_section(ui: &mut egui::Ui, loc: &LocalizationState) {
    themed_heading(ui, loc.t("info.header"));
    themed_subheading(ui, loc.t("info.status.label"));
    ui.label(loc.t("info.status"));
    ui.add_space(6.0);
    themed_subheading(ui, loc.t("info.recommendations.label"));
    ui.label(loc.t("info.recommendations"));
}

pub fn footer(ui: &mut egui::Ui, loc: &LocalizationState, logos: &[LogoView]) {
    ui.label(
        egui::RichText::new(loc.t("footer.attribution"))
            .size(theme::FONT_BODY)
            .strong(),
    );
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        for view in logos {
            match view {
                LogoView::Image { texture, size } => {
                    ui.add(egui::Image::new((*texture, *size)));
                }
                LogoView::Loading => caption(ui, loc.t("logos.loading")),
                LogoView::Error {
                    message_key,
                    detail,
                } => {
                    ui.vertical(|ui| {
                        ui.colored_label(theme::ERROR, loc.t(message_key));
                        caption(ui, detail);
                    });
                }
                LogoView::Hidden => {}
            }
            ui.add_space(12.0);
        }
    });

    ui.add_space(6.0);
    caption(ui, loc.t("footer.location"));
}
