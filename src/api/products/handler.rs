// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product catalog endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use super::request::CreateProductRequest;
use super::response::{CreateProductResponse, DeleteProductResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::catalog::Product;

/// GET /api/products - List catalog products, newest first
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

/// POST /api/products - Add a product to the catalog
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<CreateProductResponse>, ApiError> {
    let new_product = request.validate()?;
    let product = state.catalog.create_product(new_product).await?;
    info!(id = %product.id, name = %product.name, "Product created");
    Ok(Json(CreateProductResponse::new(product)))
}

/// DELETE /api/products/:id - Remove a product from the catalog
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProductResponse>, ApiError> {
    state.catalog.delete_product(&id).await?;
    info!(id = %id, "Product deleted");
    Ok(Json(DeleteProductResponse::new(&id)))
}
