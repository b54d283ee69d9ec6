// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for GET /health

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use tryon_node::api::{build_router, AppState};
use tryon_node::catalog::InMemoryProductRepository;
use tryon_node::fetch::FetchError;

use super::support::{StubBackend, StubFetcher};

#[tokio::test]
async fn test_health_reports_version_and_features() {
    let state = AppState::new(
        Arc::new(StubBackend::succeeding("aW1n", "image/png")),
        Arc::new(StubFetcher::failing(FetchError::Http("unused".into()))),
        Arc::new(InMemoryProductRepository::new()),
    );
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"]["version"], "0.1.0");
    assert!(json["version"]["features"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f == "virtual-try-on"));
}
