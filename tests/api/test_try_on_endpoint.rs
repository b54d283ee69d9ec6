// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /api/virtual-try-on
//!
//! Exercises the full router with stub fetcher/backend doubles:
//! validation ordering, error status mapping, and the success shape.

use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::atomic::Ordering;
use tower::ServiceExt;
use tryon_node::api::build_router;
use tryon_node::fetch::FetchError;
use tryon_node::generation::GenerationError;

use super::support::{app_state, try_on_request, Part, StubBackend, StubFetcher, JPEG_BYTES};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn user_image_part() -> Part<'static> {
    Part::File {
        name: "userImage",
        filename: "me.jpg",
        content_type: "image/jpeg",
        bytes: JPEG_BYTES,
    }
}

fn garment_image_part() -> Part<'static> {
    Part::File {
        name: "garmentImage",
        filename: "jacket.jpg",
        content_type: "image/jpeg",
        bytes: JPEG_BYTES,
    }
}

#[tokio::test]
async fn test_missing_user_image_returns_400() {
    let backend = StubBackend::succeeding("aW1n", "image/png");
    let backend_calls = backend.calls.clone();
    let app = build_router(app_state(backend, StubFetcher::failing(FetchError::Http("unused".into()))));

    let response = app
        .oneshot(try_on_request(&[garment_image_part()]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing user image");
    assert_eq!(backend_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_both_garment_fields_returns_400_before_any_call() {
    let backend = StubBackend::succeeding("aW1n", "image/png");
    let fetcher = StubFetcher::succeeding(JPEG_BYTES.to_vec(), "image/jpeg");
    let backend_calls = backend.calls.clone();
    let fetcher_calls = fetcher.calls.clone();
    let app = build_router(app_state(backend, fetcher));

    let response = app.oneshot(try_on_request(&[user_image_part()])).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing garment image (file or URL)");
    assert_eq!(fetcher_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backend_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_success_returns_image_and_mime_type() {
    let backend = StubBackend::succeeding("c3ludGhlc2l6ZWQ=", "image/png");
    let backend_calls = backend.calls.clone();
    let fetcher = StubFetcher::failing(FetchError::Http("unused".into()));
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[
            user_image_part(),
            garment_image_part(),
            Part::Text {
                name: "productName",
                value: "Denim Jacket",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["image"], "c3ludGhlc2l6ZWQ=");
    assert_eq!(json["mimeType"], "image/png");
    assert_eq!(backend_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_garment_url_fetch_failure_returns_500_after_single_attempt() {
    let backend = StubBackend::succeeding("aW1n", "image/png");
    let fetcher = StubFetcher::failing(FetchError::HttpStatus(
        404,
        "https://example.com/gone.jpg".to_string(),
    ));
    let backend_calls = backend.calls.clone();
    let fetcher_calls = fetcher.calls.clone();
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[
            user_image_part(),
            Part::Text {
                name: "garmentImageUrl",
                value: "https://example.com/gone.jpg",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fetcher_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_garment_url_fetched_and_generated() {
    let backend = StubBackend::succeeding("cmVzdWx0", "image/webp");
    let fetcher = StubFetcher::succeeding(JPEG_BYTES.to_vec(), "image/jpeg");
    let fetcher_calls = fetcher.calls.clone();
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[
            user_image_part(),
            Part::Text {
                name: "garmentImageUrl",
                value: "https://example.com/jacket.jpg",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["mimeType"], "image/webp");
    assert_eq!(fetcher_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_upload_wins_when_both_garment_fields_present() {
    let backend = StubBackend::succeeding("cmVzdWx0", "image/png");
    let fetcher = StubFetcher::succeeding(JPEG_BYTES.to_vec(), "image/jpeg");
    let fetcher_calls = fetcher.calls.clone();
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[
            user_image_part(),
            garment_image_part(),
            Part::Text {
                name: "garmentImageUrl",
                value: "https://example.com/jacket.jpg",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(fetcher_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_permission_denied_maps_to_403_with_details() {
    let backend = StubBackend::failing(GenerationError::PermissionDenied {
        details: "Model does not support the requested response modality".to_string(),
    });
    let fetcher = StubFetcher::failing(FetchError::Http("unused".into()));
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[user_image_part(), garment_image_part()]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Image Generation"));
    assert!(json["details"].as_str().unwrap().contains("modality"));
}

#[tokio::test]
async fn test_upstream_rejection_forwards_status_and_message() {
    let backend = StubBackend::failing(GenerationError::UpstreamRejected {
        status: 429,
        message: "Resource has been exhausted".to_string(),
    });
    let fetcher = StubFetcher::failing(FetchError::Http("unused".into()));
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[user_image_part(), garment_image_part()]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Resource has been exhausted");
}

#[tokio::test]
async fn test_no_image_produced_maps_to_500() {
    let backend = StubBackend::failing(GenerationError::NoImageProduced);
    let fetcher = StubFetcher::failing(FetchError::Http("unused".into()));
    let app = build_router(app_state(backend, fetcher));

    let response = app
        .oneshot(try_on_request(&[user_image_part(), garment_image_part()]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No image generated");
}
