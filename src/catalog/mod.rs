// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product catalog
//!
//! Narrow collaborator of the try-on flow: it populates the
//! garment-selection UI and the admin views. The store is an explicit
//! repository injected into request handlers; no process-wide mutable
//! collection.

pub mod repository;
pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use repository::{CatalogError, InMemoryProductRepository, ProductRepository};
pub use seed::demo_products;

/// One catalog garment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Image reference (URL or asset path) shown in the selection UI
    pub image: String,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub stock: Option<u32>,
}
