// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media-type normalization for the generation backend

use image::codecs::jpeg::JpegEncoder;
use thiserror::Error;

use super::ImageAsset;

/// Media types the generation backend accepts as-is.
///
/// The backend supports jpeg, png, webp, heic and heif. It does NOT
/// support avif, so anything outside this set is re-encoded.
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/heic",
    "image/heif",
];

/// JPEG quality used when re-encoding unsupported formats
const REENCODE_JPEG_QUALITY: u8 = 90;

/// Errors from image preparation
#[derive(Debug, Error)]
pub enum ImagePrepError {
    #[error("image data is empty")]
    EmptyData,

    #[error("failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("failed to encode image: {0}")]
    EncodeFailed(String),
}

/// Check whether a media type is accepted by the backend without conversion
pub fn is_supported_media_type(media_type: &str) -> bool {
    SUPPORTED_MEDIA_TYPES
        .iter()
        .any(|m| m.eq_ignore_ascii_case(media_type))
}

/// Normalize an image into a backend-accepted format.
///
/// Already-supported input passes through byte-for-byte. Anything else
/// is decoded and re-encoded as JPEG at quality 90. Corrupt input is
/// an error; normalization never silently drops an image.
pub fn normalize(bytes: Vec<u8>, declared_media_type: &str) -> Result<ImageAsset, ImagePrepError> {
    if bytes.is_empty() {
        return Err(ImagePrepError::EmptyData);
    }

    if is_supported_media_type(declared_media_type) {
        return Ok(ImageAsset::new(
            bytes,
            declared_media_type.to_ascii_lowercase(),
        ));
    }

    tracing::info!(
        "Converting unsupported media type {} to image/jpeg",
        declared_media_type
    );

    // Decode from bytes rather than trusting the declared type
    let img = image::load_from_memory(&bytes)
        .map_err(|e| ImagePrepError::DecodeFailed(e.to_string()))?;

    let rgb = img.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, REENCODE_JPEG_QUALITY)
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImagePrepError::EncodeFailed(e.to_string()))?;

    Ok(ImageAsset::new(out, "image/jpeg"))
}
