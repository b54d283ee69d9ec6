// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod http_server;
pub mod products;
pub mod try_on;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
pub use products::{
    create_product_handler, delete_product_handler, list_products_handler, CreateProductRequest,
    CreateProductResponse, DeleteProductResponse,
};
pub use try_on::{virtual_try_on_handler, TryOnForm, TryOnResponse};
