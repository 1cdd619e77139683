//! Brand palette shared by the on-screen charts and the PNG exports.

use bevy_egui::egui;

use simulation::comparison::Indicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0, self.1, self.2)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

/// #0E454A
pub const DARK_TEAL: Rgb = Rgb(14, 69, 74);
/// #1FFF5F
pub const VIBRANT_GREEN: Rgb = Rgb(31, 255, 95);
pub const WHITE: Rgb = Rgb(255, 255, 255);
/// #009BD3
pub const SKY_BLUE: Rgb = Rgb(0, 155, 211);
/// #008CCF
pub const MID_BLUE: Rgb = Rgb(0, 140, 207);
/// #00366E
pub const NAVY: Rgb = Rgb(0, 54, 110);
pub const SPINE: Rgb = Rgb(0, 0, 0);

/// Chart colour cycle, indexed by the per-chart styles below.
pub const CHART_COLORS: [Rgb; 4] = [DARK_TEAL, VIBRANT_GREEN, SKY_BLUE, NAVY];

/// Colours for one comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// `[baseline, projection]` bar fills.
    pub bar_colors: [Rgb; 2],
    pub title_color: Rgb,
    pub axis_label_color: Rgb,
    pub tick_color: Rgb,
    pub annotation_color: Rgb,
    pub background: Rgb,
}

impl ChartStyle {
    pub fn for_indicator(indicator: Indicator) -> Self {
        let [c0, c1, c2, c3] = CHART_COLORS;
        let (bar_colors, axis_label_color) = match indicator {
            Indicator::AvoidedGei => ([c0, c1], c3),
            Indicator::ValorizedMaterial => ([c2, c3], c0),
            Indicator::EstimatedIncome => ([c1, c0], c3),
        };
        Self {
            bar_colors,
            title_color: c3,
            axis_label_color,
            tick_color: c0,
            annotation_color: c0,
            background: WHITE,
        }
    }
}
