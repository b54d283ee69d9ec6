// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Product repository trait and in-memory implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewProduct, Product};

/// Catalog storage errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Storage seam for the product catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List products, newest first
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    async fn create_product(&self, new_product: NewProduct) -> Result<Product, CatalogError>;

    async fn delete_product(&self, id: &str) -> Result<(), CatalogError>;

    async fn get_product(&self, id: &str) -> Result<Option<Product>, CatalogError>;
}

/// In-memory repository used for development and tests
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given products
    pub async fn seeded(seed: Vec<NewProduct>) -> Self {
        let repo = Self::new();
        for new_product in seed {
            // Seeding an in-memory vector cannot fail
            let _ = repo.create_product(new_product).await;
        }
        repo
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.products.read().await;
        let mut listed: Vec<Product> = products.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn create_product(&self, new_product: NewProduct) -> Result<Product, CatalogError> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new_product.name,
            category: new_product.category,
            image: new_product.image,
            stock: new_product.stock.unwrap_or(0),
            created_at: Utc::now(),
        };
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: &str) -> Result<(), CatalogError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}
