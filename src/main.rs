// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};
use tryon_node::{
    api::{start_server, AppState},
    catalog::{demo_products, InMemoryProductRepository},
    config::Config,
    fetch::HttpGarmentFetcher,
    generation::GeminiClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Try-On Node...\n");
    println!("📦 BUILD VERSION: {}", tryon_node::version::VERSION);
    println!("📅 Build Date: {}", tryon_node::version::BUILD_DATE);
    println!();

    let config = Config::from_env()?;

    println!("🧠 Initializing generation backend...");
    let backend = GeminiClient::new(
        &config.gemini_endpoint,
        &config.gemini_model,
        &config.gemini_api_key,
    )?;
    println!("✅ Generation backend ready ({})", config.gemini_model);

    let fetcher = HttpGarmentFetcher::new()?;

    println!("🛍️  Seeding demo catalog...");
    let catalog = InMemoryProductRepository::seeded(demo_products()).await;

    let state = AppState::new(Arc::new(backend), Arc::new(fetcher), Arc::new(catalog));

    println!("🌐 Starting API server on port {}...", config.api_port);
    start_server(state, config.api_port).await?;

    Ok(())
}
