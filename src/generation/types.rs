// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core try-on request and result types

use async_trait::async_trait;

use super::error::GenerationError;
use crate::imaging::ImageAsset;

/// Product label used when no catalog product is involved
pub const DEFAULT_PRODUCT_LABEL: &str = "custom garment";

/// Where the garment image comes from.
///
/// Exactly one variant per request; "neither and both" states are
/// unrepresentable past form validation.
#[derive(Debug, Clone)]
pub enum GarmentSource {
    /// Garment uploaded directly by the user
    Upload(ImageAsset),
    /// Garment specified by a remote URL, fetched server-side
    Url(String),
    /// Garment pre-selected from the catalog
    CatalogProduct { name: String, asset: ImageAsset },
}

impl GarmentSource {
    /// Label describing the garment to the generation backend
    pub fn label(&self) -> &str {
        match self {
            Self::CatalogProduct { name, .. } => name,
            _ => DEFAULT_PRODUCT_LABEL,
        }
    }
}

/// One complete try-on submission.
///
/// The user photo is always raw bytes; only the garment may arrive as
/// a URL.
#[derive(Debug, Clone)]
pub struct TryOnRequest {
    pub user_photo: ImageAsset,
    pub garment: GarmentSource,
    pub product_label: String,
}

/// The synthesized composite, exactly one per successful request
#[derive(Debug, Clone, PartialEq)]
pub struct TryOnResult {
    /// Base64-encoded image bytes, as delivered by the backend
    pub image: String,
    pub media_type: String,
}

/// Seam to the image-synthesis backend.
///
/// Implemented by [`GeminiClient`](super::client::GeminiClient); test
/// code substitutes stubs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Issue exactly one synthesis request for two prepared assets
    async fn generate(
        &self,
        user: &ImageAsset,
        garment: &ImageAsset,
        product_label: &str,
    ) -> Result<TryOnResult, GenerationError>;
}

/// Seam the session controller submits a full request through
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TryOnService: Send + Sync {
    async fn submit(&self, request: TryOnRequest) -> Result<TryOnResult, GenerationError>;
}
