//! Resize planning for embedded images.
//!
//! Pure geometry and quality policy; no pixels are touched here. The
//! assembler executes the plan with its image codec.

/// Target dimensions and encode quality for one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePlan {
    pub width: u32,
    pub height: u32,
    /// JPEG quality in the 0..=1 range.
    pub quality: f32,
}

/// Quality used when the image already fits the target dimension.
pub const QUALITY_UNSCALED: f32 = 0.7;

/// Quality used for images that needed downscaling.
pub const QUALITY_SCALED: f32 = 0.6;

/// Plans a resize that keeps the larger dimension at `target_max_dimension`.
///
/// Images already within the target keep their dimensions and get the
/// higher quality; larger images are scaled uniformly (aspect ratio
/// preserved) and encoded at the lower quality.
pub fn plan_resize(width: u32, height: u32, target_max_dimension: u32) -> ResizePlan {
    if width <= target_max_dimension && height <= target_max_dimension {
        return ResizePlan { width, height, quality: QUALITY_UNSCALED };
    }

    let scale = target_max_dimension as f64 / width.max(height) as f64;
    ResizePlan {
        // Extreme aspect ratios would otherwise round a dimension to zero.
        width: ((width as f64 * scale).round() as u32).max(1),
        height: ((height as f64 * scale).round() as u32).max(1),
        quality: QUALITY_SCALED,
    }
}
