// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product API response types

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Response after creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub message: String,
    pub product: Product,
    pub success: bool,
}

impl CreateProductResponse {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Product added successfully".to_string(),
            product,
            success: true,
        }
    }
}

/// Response after deleting a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductResponse {
    pub message: String,
    pub success: bool,
}

impl DeleteProductResponse {
    pub fn new(id: &str) -> Self {
        Self {
            message: format!("Product {} deleted", id),
            success: true,
        }
    }
}
