// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Virtual try-on endpoint handler

use axum::{extract::Multipart, extract::State, Json};
use tracing::{error, info};

use super::request::TryOnForm;
use super::response::TryOnResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::generation::run_try_on;

/// POST /api/virtual-try-on - Synthesize a person wearing a garment
///
/// Accepts a multipart form with `userImage` (file, required), exactly
/// one of `garmentImage` (file) or `garmentImageUrl` (text), and an
/// optional `productName`. Returns the composite as base64 JSON.
pub async fn virtual_try_on_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TryOnResponse>, ApiError> {
    let form = TryOnForm::from_multipart(multipart).await?;
    let request = form.into_request()?;

    info!(
        product = %request.product_label,
        "Starting virtual try-on generation"
    );

    let result = run_try_on(
        state.fetcher.as_ref(),
        state.backend.as_ref(),
        request,
    )
    .await
    .map_err(|e| {
        error!("Try-on generation failed: {}", e);
        ApiError::from(e)
    })?;

    info!(media_type = %result.media_type, "Try-on generation succeeded");
    Ok(Json(TryOnResponse::from(result)))
}
