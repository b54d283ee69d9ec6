// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on multipart form parsing and validation

use axum::extract::Multipart;

use crate::api::errors::ApiError;
use crate::generation::{GarmentSource, TryOnRequest, DEFAULT_PRODUCT_LABEL};
use crate::imaging::ImageAsset;

/// Media type assumed when a file part carries none
const FALLBACK_MEDIA_TYPE: &str = "image/jpeg";

/// Raw fields of the try-on multipart form.
///
/// Collected verbatim; `into_request` enforces the presence rules and
/// picks the garment source.
#[derive(Debug, Default)]
pub struct TryOnForm {
    pub user_image: Option<ImageAsset>,
    pub garment_image: Option<ImageAsset>,
    pub garment_image_url: Option<String>,
    pub product_name: Option<String>,
}

impl TryOnForm {
    /// Drain a multipart stream into form fields.
    ///
    /// Unknown field names are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = TryOnForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("malformed multipart body: {}", e)))?
        {
            let name = match field.name() {
                Some(name) => name.to_string(),
                None => continue,
            };

            match name.as_str() {
                "userImage" => {
                    let media_type = field
                        .content_type()
                        .unwrap_or(FALLBACK_MEDIA_TYPE)
                        .to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read userImage: {}", e))
                    })?;
                    form.user_image = Some(ImageAsset::new(bytes.to_vec(), media_type));
                }
                "garmentImage" => {
                    let media_type = field
                        .content_type()
                        .unwrap_or(FALLBACK_MEDIA_TYPE)
                        .to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read garmentImage: {}", e))
                    })?;
                    form.garment_image = Some(ImageAsset::new(bytes.to_vec(), media_type));
                }
                "garmentImageUrl" => {
                    let url = field.text().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read garmentImageUrl: {}", e))
                    })?;
                    if !url.trim().is_empty() {
                        form.garment_image_url = Some(url);
                    }
                }
                "productName" => {
                    let name = field.text().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read productName: {}", e))
                    })?;
                    if !name.trim().is_empty() {
                        form.product_name = Some(name);
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validate the form and build a [`TryOnRequest`].
    ///
    /// Presence checks run before any network activity. When both an
    /// uploaded garment and a URL are given, the upload wins.
    pub fn into_request(self) -> Result<TryOnRequest, ApiError> {
        let user_photo = self
            .user_image
            .filter(|asset| !asset.is_empty())
            .ok_or_else(|| ApiError::MissingInput("Missing user image".to_string()))?;

        let garment_upload = self.garment_image.filter(|asset| !asset.is_empty());

        let garment = match (garment_upload, self.garment_image_url) {
            (Some(asset), _) => GarmentSource::Upload(asset),
            (None, Some(url)) => GarmentSource::Url(url),
            (None, None) => {
                return Err(ApiError::MissingInput(
                    "Missing garment image (file or URL)".to_string(),
                ))
            }
        };

        let product_label = self
            .product_name
            .unwrap_or_else(|| DEFAULT_PRODUCT_LABEL.to_string());

        Ok(TryOnRequest {
            user_photo,
            garment,
            product_label,
        })
    }
}
