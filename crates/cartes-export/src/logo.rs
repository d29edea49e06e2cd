use std::path::Path;

use printpdf::Image;
use printpdf::image_crate::imageops::FilterType;
use printpdf::image_crate::{self, DynamicImage, GenericImageView};

use crate::error::ExportError;

/// Widest logo kept after decoding: 15 mm at 300 dpi.
pub const MAX_LOGO_WIDTH_PX: u32 = 180;

/// Decoded logo drawn on every card, flattened to RGB.
#[derive(Debug, Clone)]
pub struct Logo {
    image: DynamicImage,
    width_px: u32,
    height_px: u32,
}

impl Logo {
    /// Read and decode the logo at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let asset_error = |reason: String| ExportError::LogoAsset {
            path: path.display().to_string(),
            reason,
        };

        let bytes = std::fs::read(path).map_err(|e| asset_error(e.to_string()))?;
        let logo = Self::decode(&bytes).map_err(asset_error)?;
        tracing::debug!(
            path = %path.display(),
            width = logo.width_px,
            height = logo.height_px,
            "loaded logo"
        );
        Ok(logo)
    }

    /// Decode an in-memory image (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        Self::decode(bytes).map_err(|reason| ExportError::LogoAsset {
            path: "<memory>".to_string(),
            reason,
        })
    }

    fn decode(bytes: &[u8]) -> Result<Self, String> {
        let decoded = image_crate::load_from_memory(bytes).map_err(|e| e.to_string())?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err("image has no pixels".to_string());
        }

        // Every card embeds its own copy, so keep each one print-sized.
        let decoded = if decoded.width() > MAX_LOGO_WIDTH_PX {
            let height = (u64::from(decoded.height()) * u64::from(MAX_LOGO_WIDTH_PX)
                / u64::from(decoded.width()))
            .max(1) as u32;
            decoded.resize_exact(MAX_LOGO_WIDTH_PX, height, FilterType::Triangle)
        } else {
            decoded
        };

        // Alpha is dropped; cards are printed on white.
        let rgb = decoded.to_rgb8();
        let (width_px, height_px) = rgb.dimensions();
        Ok(Self {
            image: DynamicImage::ImageRgb8(rgb),
            width_px,
            height_px,
        })
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Height over width.
    pub fn aspect_ratio(&self) -> f32 {
        self.height_px as f32 / self.width_px as f32
    }

    /// Resolution at which the image measures `width_mm` on the page.
    pub(crate) fn dpi_for_width(&self, width_mm: f32) -> f32 {
        self.width_px as f32 * 25.4 / width_mm
    }

    pub(crate) fn to_pdf_image(&self) -> Image {
        Image::from_dynamic_image(&self.image)
    }
}
