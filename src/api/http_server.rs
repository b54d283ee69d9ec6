// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring: shared state, router, and startup

use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::products::{
    create_product_handler, delete_product_handler, list_products_handler,
};
use crate::api::try_on::virtual_try_on_handler;
use crate::catalog::ProductRepository;
use crate::fetch::GarmentFetcher;
use crate::generation::GenerationBackend;
use crate::version;

/// Multipart uploads carry two images; cap the body well above the
/// expected size of a downscaled pair.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Shared handler state, cloned per request
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn GenerationBackend>,
    pub fetcher: Arc<dyn GarmentFetcher>,
    pub catalog: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        fetcher: Arc<dyn GarmentFetcher>,
        catalog: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            backend,
            fetcher,
            catalog,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Virtual try-on endpoint
        .route("/api/virtual-try-on", post(virtual_try_on_handler))
        // Product catalog endpoints
        .route(
            "/api/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/api/products/:id", delete(delete_product_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve the API until the process exits
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(_state): State<AppState>) -> impl IntoResponse {
    axum::response::Json(serde_json::json!({
        "status": "healthy",
        "version": version::get_version_info(),
    }))
}
