// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the /api/products catalog endpoints

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use tryon_node::api::{build_router, AppState};
use tryon_node::catalog::{demo_products, InMemoryProductRepository};
use tryon_node::fetch::FetchError;

use super::support::{StubBackend, StubFetcher};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn state_with_catalog(catalog: InMemoryProductRepository) -> AppState {
    AppState::new(
        Arc::new(StubBackend::succeeding("aW1n", "image/png")),
        Arc::new(StubFetcher::failing(FetchError::Http("unused".into()))),
        Arc::new(catalog),
    )
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_seeded_products() {
    let catalog = InMemoryProductRepository::seeded(demo_products()).await;
    let app = build_router(state_with_catalog(catalog));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let products = json.as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert!(products.iter().all(|p| p["stock"] == 10));
    assert!(products[0].get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_product() {
    let app = build_router(state_with_catalog(InMemoryProductRepository::new()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({
                "name": "Linen Shirt",
                "category": "Shirt",
                "image": "https://example.com/linen.jpg",
                "stock": 4
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Product added successfully");
    assert_eq!(json["product"]["name"], "Linen Shirt");
    assert!(!json["product"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_product_missing_fields_returns_400() {
    let app = build_router(state_with_catalog(InMemoryProductRepository::new()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({ "name": "No image or category" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn test_delete_product() {
    let catalog = InMemoryProductRepository::seeded(demo_products()).await;
    let id = {
        use tryon_node::catalog::ProductRepository;
        catalog.list_products().await.unwrap()[0].id.clone()
    };
    let app = build_router(state_with_catalog(catalog));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/products/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_delete_unknown_product_returns_404() {
    let app = build_router(state_with_catalog(InMemoryProductRepository::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("no-such-id"));
}
