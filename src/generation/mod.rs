// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on generation pipeline
//!
//! Resolves a [`TryOnRequest`]'s garment source into raw bytes,
//! normalizes both images for the backend, builds the combined prompt
//! payload, and issues the single synthesis call.

pub mod client;
pub mod error;
pub mod payload;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::fetch::GarmentFetcher;
use crate::imaging::normalize;

pub use client::GeminiClient;
pub use error::{GenerationError, PERMISSION_DENIED_MESSAGE};
pub use payload::build_payload;
pub use types::{
    GarmentSource, GenerationBackend, TryOnRequest, TryOnResult, TryOnService,
    DEFAULT_PRODUCT_LABEL,
};

/// Run one try-on request end to end.
///
/// A URL garment is fetched exactly once; fetch and image-preparation
/// failures are transport-class errors. No state survives the call.
pub async fn run_try_on(
    fetcher: &dyn GarmentFetcher,
    backend: &dyn GenerationBackend,
    request: TryOnRequest,
) -> Result<TryOnResult, GenerationError> {
    let TryOnRequest {
        user_photo,
        garment,
        product_label,
    } = request;

    let garment_raw = match garment {
        GarmentSource::Upload(asset) => asset,
        GarmentSource::CatalogProduct { asset, .. } => asset,
        GarmentSource::Url(url) => {
            let fetched = fetcher
                .fetch_image(&url)
                .await
                .map_err(|e| GenerationError::Transport(e.to_string()))?;
            crate::imaging::ImageAsset::new(fetched.bytes, fetched.media_type)
        }
    };

    let user = normalize(user_photo.bytes, &user_photo.media_type)
        .map_err(|e| GenerationError::Transport(e.to_string()))?;
    let garment = normalize(garment_raw.bytes, &garment_raw.media_type)
        .map_err(|e| GenerationError::Transport(e.to_string()))?;

    backend.generate(&user, &garment, &product_label).await
}

/// In-process [`TryOnService`] wiring the fetcher and backend together
pub struct LocalTryOnService {
    fetcher: Arc<dyn GarmentFetcher>,
    backend: Arc<dyn GenerationBackend>,
}

impl LocalTryOnService {
    pub fn new(fetcher: Arc<dyn GarmentFetcher>, backend: Arc<dyn GenerationBackend>) -> Self {
        Self { fetcher, backend }
    }
}

#[async_trait]
impl TryOnService for LocalTryOnService {
    async fn submit(&self, request: TryOnRequest) -> Result<TryOnResult, GenerationError> {
        run_try_on(self.fetcher.as_ref(), self.backend.as_ref(), request).await
    }
}
