use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;

pub const APP_VERSION: &str = "1.0";

/// Resolution of exported chart images.
pub const EXPORT_DPI: u32 = 300;
/// Exported figure size in inches (width, height).
pub const FIGURE_SIZE_IN: (f32, f32) = (8.0, 6.0);
/// Padding kept around the content when cropping an export to its bounding box.
pub const TIGHT_BBOX_PAD_IN: f32 = 0.1;

/// Logos are shown at this width, height follows the aspect ratio.
pub const LOGO_DISPLAY_WIDTH: f32 = 100.0;
pub const SUSTREND_LOGO_URL: &str = "https://drive.google.com/uc?id=1vx_znPU2VfdkzeDtl91dlpw_p9mmu4dd";
pub const TTGREENFOODS_LOGO_URL: &str =
    "https://drive.google.com/uc?id=1uIQZQywjuQJz6Eokkj6dNSpBroJ8tQf8";

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

pub const ENV_EXPORT_DIR: &str = "VALORIZA_EXPORT_DIR";
pub const ENV_OFFLINE: &str = "VALORIZA_OFFLINE";
pub const ENV_LANG: &str = "VALORIZA_LANG";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "VALORIZA_FETCH_TIMEOUT_SECS";
pub const ENV_HEADLESS_EXPORT: &str = "VALORIZA_HEADLESS_EXPORT";
pub const ENV_SCENARIO: &str = "VALORIZA_SCENARIO";

/// Runtime settings, read once at startup from `VALORIZA_*` environment variables.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    /// Directory chart PNGs are written into.
    pub export_dir: PathBuf,
    /// Branding logos, fetched once at startup.
    pub logo_urls: Vec<String>,
    pub fetch_logos: bool,
    pub fetch_timeout: Duration,
    /// Initial locale code.
    pub locale: String,
    pub export_dpi: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            logo_urls: vec![
                SUSTREND_LOGO_URL.to_string(),
                TTGREENFOODS_LOGO_URL.to_string(),
            ],
            fetch_logos: true,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            locale: crate::localization::DEFAULT_LOCALE.to_string(),
            export_dpi: EXPORT_DPI,
        }
    }
}

impl DashboardSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unparsable values are
    /// logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|d| !d.trim().is_empty()) {
            settings.export_dir = PathBuf::from(dir);
        }

        if lookup(ENV_OFFLINE).is_some() {
            settings.fetch_logos = false;
        }

        if let Some(lang) = lookup(ENV_LANG) {
            let lang = lang.trim().to_lowercase();
            if crate::localization::SUPPORTED_LOCALES.contains(&lang.as_str()) {
                settings.locale = lang;
            } else {
                warn!("{ENV_LANG}={lang} is not a supported locale, using {}", settings.locale);
            }
        }

        if let Some(raw) = lookup(ENV_FETCH_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => settings.fetch_timeout = Duration::from_secs(secs),
                _ => warn!(
                    "{ENV_FETCH_TIMEOUT_SECS}={raw} is not a positive integer, using {}s",
                    DEFAULT_FETCH_TIMEOUT_SECS
                ),
            }
        }

        settings
    }

    /// Pixel size of an exported figure before tight cropping.
    pub fn figure_pixels(&self) -> (u32, u32) {
        let dpi = self.export_dpi as f32;
        (
            (FIGURE_SIZE_IN.0 * dpi).round() as u32,
            (FIGURE_SIZE_IN.1 * dpi).round() as u32,
        )
    }
}
