// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product catalog API endpoint module
//!
//! Provides GET/POST /api/products and DELETE /api/products/:id.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{create_product_handler, delete_product_handler, list_products_handler};
pub use request::CreateProductRequest;
pub use response::{CreateProductResponse, DeleteProductResponse};
