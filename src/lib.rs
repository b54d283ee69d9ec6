// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod generation;
pub mod imaging;
pub mod session;
pub mod version;

// Re-export the main service types
pub use api::{build_router, start_server, AppState};
pub use catalog::{
    demo_products, CatalogError, InMemoryProductRepository, NewProduct, Product,
    ProductRepository,
};
pub use config::{Config, ConfigError};
pub use fetch::{FetchError, FetchedImage, GarmentFetcher, HttpGarmentFetcher};
pub use generation::{
    GarmentSource, GeminiClient, GenerationBackend, GenerationError, LocalTryOnService,
    TryOnRequest, TryOnResult, TryOnService,
};
pub use imaging::ImageAsset;
pub use session::{SessionError, SessionState, TryOnSession};
