//! Document generation configuration.

use serde::Deserialize;

/// The externally tunable knobs of the document assembler.
///
/// Defaults are tuned for constrained mobile renderers: small images,
/// moderate quality, a 3x3 card grid, and a hard ceiling on how many
/// images one document may embed at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PdfGenerationConfig {
    /// Maximum width or height of an embedded image, in pixels.
    pub max_image_dimension: u32,
    /// JPEG quality in the 0..=1 range.
    pub image_quality: f32,
    /// Cards per page; pages are closed manually at this count.
    pub max_images_per_page: usize,
    /// Above this many links, image embedding is skipped entirely.
    pub max_total_images: usize,
}

impl Default for PdfGenerationConfig {
    fn default() -> Self {
        Self {
            max_image_dimension: 400,
            image_quality: 0.6,
            max_images_per_page: 9,
            max_total_images: 30,
        }
    }
}
