use std::io::Read;
use std::time::Duration;

use bevy::image::{CompressedImageFormats, Image, ImageFormat, ImageSampler, ImageType};
use bevy::render::render_asset::RenderAssetUsages;
use thiserror::Error;

/// Upper bound on a logo download.
pub const MAX_LOGO_BYTES: u64 = 8 * 1024 * 1024;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Why a logo could not be shown. Rendered inline in place of the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandingError {
    /// Transport failure or a non-2xx response.
    #[error("could not fetch {url}: {reason}")]
    NetworkFetch { url: String, reason: String },

    /// The response body is not a PNG or JPEG we can decode.
    #[error("could not decode image from {url}: {reason}")]
    ImageDecode { url: String, reason: String },
}

impl BrandingError {
    pub fn url(&self) -> &str {
        match self {
            BrandingError::NetworkFetch { url, .. } | BrandingError::ImageDecode { url, .. } => url,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, BrandingError::NetworkFetch { .. })
    }
}

pub fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(concat!("valoriza/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Blocking GET of `url`, limited to [`MAX_LOGO_BYTES`].
pub fn fetch_logo_bytes(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>, BrandingError> {
    let network = |reason: String| BrandingError::NetworkFetch {
        url: url.to_string(),
        reason,
    };

    let response = agent.get(url).call().map_err(|err| match err {
        ureq::Error::Status(code, response) => {
            network(format!("HTTP {code} {}", response.status_text()))
        }
        ureq::Error::Transport(transport) => network(transport.to_string()),
    })?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_LOGO_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|err| network(err.to_string()))?;
    Ok(bytes)
}

pub fn sniff_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(PNG_MAGIC) {
        Some(ImageFormat::Png)
    } else if bytes.starts_with(JPEG_MAGIC) {
        Some(ImageFormat::Jpeg)
    } else {
        None
    }
}

/// Decode downloaded bytes into a Bevy image.
pub fn decode_logo(url: &str, bytes: &[u8]) -> Result<Image, BrandingError> {
    let decode = |reason: String| BrandingError::ImageDecode {
        url: url.to_string(),
        reason,
    };
    if bytes.is_empty() {
        return Err(decode("empty response body".to_string()));
    }
    let format = sniff_image_format(bytes)
        .ok_or_else(|| decode("response is neither PNG nor JPEG".to_string()))?;

    Image::from_buffer(
        bytes,
        ImageType::Format(format),
        CompressedImageFormats::NONE,
        true,
        ImageSampler::Default,
        RenderAssetUsages::default(),
    )
    .map_err(|err| decode(err.to_string()))
}

/// Fetch and decode one logo. Runs on the IO task pool.
pub fn fetch_logo(agent: &ureq::Agent, url: &str) -> Result<Image, BrandingError> {
    let bytes = fetch_logo_bytes(agent, url)?;
    decode_logo(url, &bytes)
}
