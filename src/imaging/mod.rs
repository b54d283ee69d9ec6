// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preparation for the try-on pipeline
//!
//! Two concerns live here: converting inputs into a media type the
//! generation backend accepts (`normalize`), and bounding upload size
//! before any network activity (`downscale_for_upload`).

pub mod normalize;
pub mod resize;

pub use normalize::{normalize, ImagePrepError, SUPPORTED_MEDIA_TYPES};
pub use resize::{downscale_for_upload, MAX_CLIENT_DIMENSION};

/// Raw image bytes paired with their media type
///
/// Constructed per request from an upload, a fetched URL, or a catalog
/// reference; never cached or shared across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl ImageAsset {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
