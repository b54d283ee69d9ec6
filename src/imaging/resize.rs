// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client-side downscaling of oversized inputs
//!
//! Applied by the session controller before any network activity, to
//! bound request payload size and backend latency. Independent of the
//! server-side normalizer.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use super::normalize::ImagePrepError;
use super::ImageAsset;

/// Largest allowed dimension before an input is downscaled
pub const MAX_CLIENT_DIMENSION: u32 = 800;

/// JPEG quality for downscaled re-encodes
const DOWNSCALE_JPEG_QUALITY: u8 = 80;

/// Downscale an image so neither dimension exceeds [`MAX_CLIENT_DIMENSION`].
///
/// Aspect ratio is preserved; the result is re-encoded as JPEG. Images
/// already within bounds are returned unchanged.
pub fn downscale_for_upload(asset: &ImageAsset) -> Result<ImageAsset, ImagePrepError> {
    if asset.bytes.is_empty() {
        return Err(ImagePrepError::EmptyData);
    }

    let img = image::load_from_memory(&asset.bytes)
        .map_err(|e| ImagePrepError::DecodeFailed(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if width <= MAX_CLIENT_DIMENSION && height <= MAX_CLIENT_DIMENSION {
        return Ok(asset.clone());
    }

    let (new_width, new_height) = scaled_dimensions(width, height, MAX_CLIENT_DIMENSION);
    tracing::debug!(
        "Downscaling {}x{} input to {}x{}",
        width,
        height,
        new_width,
        new_height
    );

    let resized = img.resize_exact(new_width, new_height, FilterType::Triangle);
    let rgb = resized.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, DOWNSCALE_JPEG_QUALITY)
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImagePrepError::EncodeFailed(e.to_string()))?;

    Ok(ImageAsset::new(out, "image/jpeg"))
}

/// Scale (width, height) so the larger side equals `max`, preserving ratio
fn scaled_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width >= height {
        let scaled = (height as f64 * max as f64 / width as f64).round() as u32;
        (max, scaled.max(1))
    } else {
        let scaled = (width as f64 * max as f64 / height as f64).round() as u32;
        (scaled.max(1), max)
    }
}
