// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product creation request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::catalog::NewProduct;

/// Request body for creating a catalog product.
///
/// All fields optional at the wire level so a missing field reports a
/// 400 instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl CreateProductRequest {
    /// Validate required fields and build a [`NewProduct`]
    pub fn validate(self) -> Result<NewProduct, ApiError> {
        let missing = |field: Option<String>| field.filter(|v| !v.trim().is_empty());

        match (
            missing(self.name),
            missing(self.category),
            missing(self.image),
        ) {
            (Some(name), Some(category), Some(image)) => Ok(NewProduct {
                name,
                category,
                image,
                stock: self.stock,
            }),
            _ => Err(ApiError::MissingInput(
                "Missing required fields".to_string(),
            )),
        }
    }
}
