//! Per-image preparation: fetch, compress, inline-encode.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::GenericImageView;
use image::codecs::jpeg::JpegEncoder;
use std::io::Write as _;
use std::time::Duration;
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::time::timeout;
use trama_budget::plan_resize;
use trama_traits::{FetchError, ImageFetcher};

/// Bounded wait per download; on expiry the image is treated as absent,
/// never as a whole-document failure.
pub(crate) const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub(crate) enum PrepareError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads one image and produces an inline-embeddable JPEG data URI
/// at most `max_dimension` pixels on its larger side.
///
/// The raw download is spooled to a scoped temp file so the payload is
/// not resident alongside the decoded pixels; the file is removed when
/// the handle drops, on the error paths included.
pub(crate) async fn prepare_data_uri<F: ImageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    max_dimension: u32,
    quality: f32,
) -> Result<String, PrepareError> {
    let bytes = match timeout(DOWNLOAD_TIMEOUT, fetcher.fetch(url)).await {
        Ok(result) => result?,
        Err(_) => return Err(FetchError::TimedOut(url.to_string()).into()),
    };

    let mut spool = NamedTempFile::new()?;
    spool.write_all(&bytes)?;
    spool.flush()?;
    drop(bytes);

    let decoded = image::open(spool.path()).map_err(|e| PrepareError::Decode(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    let plan = plan_resize(width, height, max_dimension);
    let resized = if (plan.width, plan.height) == (width, height) {
        decoded
    } else {
        decoded.resize_exact(plan.width, plan.height, image::imageops::FilterType::Triangle)
    };

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = image::DynamicImage::ImageRgb8(resized.to_rgb8());
    drop(resized);

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, quality_percent(quality));
    rgb.write_with_encoder(encoder)
        .map_err(|e| PrepareError::Encode(e.to_string()))?;

    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)))
}

fn quality_percent(quality: f32) -> u8 {
    (quality.clamp(0.01, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use trama_traits::InMemoryImageFetcher;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([10, 200, 30]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_quality_percent_clamps() {
        assert_eq!(quality_percent(0.6), 60);
        assert_eq!(quality_percent(1.5), 100);
        assert_eq!(quality_percent(-0.1), 1);
    }

    #[tokio::test]
    async fn test_prepare_produces_jpeg_data_uri() {
        let fetcher = InMemoryImageFetcher::new();
        fetcher.add("mem://a.png", png_bytes(800, 400));

        let uri = prepare_data_uri(&fetcher, "mem://a.png", 400, 0.6)
            .await
            .unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));

        let jpeg = BASE64
            .decode(uri.trim_start_matches("data:image/jpeg;base64,"))
            .unwrap();
        let round_trip = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(round_trip.dimensions(), (400, 200));
    }

    #[tokio::test]
    async fn test_prepare_keeps_small_image_dimensions() {
        let fetcher = InMemoryImageFetcher::new();
        fetcher.add("mem://small.png", png_bytes(120, 90));

        let uri = prepare_data_uri(&fetcher, "mem://small.png", 400, 0.6)
            .await
            .unwrap();
        let jpeg = BASE64
            .decode(uri.trim_start_matches("data:image/jpeg;base64,"))
            .unwrap();
        assert_eq!(image::load_from_memory(&jpeg).unwrap().dimensions(), (120, 90));
    }

    #[tokio::test]
    async fn test_prepare_missing_image_is_fetch_error() {
        let fetcher = InMemoryImageFetcher::new();
        let result = prepare_data_uri(&fetcher, "mem://missing.png", 400, 0.6).await;
        assert!(matches!(result, Err(PrepareError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_prepare_garbage_bytes_is_decode_error() {
        let fetcher = InMemoryImageFetcher::new();
        fetcher.add("mem://garbage", b"not an image at all".to_vec());
        let result = prepare_data_uri(&fetcher, "mem://garbage", 400, 0.6).await;
        assert!(matches!(result, Err(PrepareError::Decode(_))));
    }
}
