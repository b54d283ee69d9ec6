// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP error mapping for the API surface

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::CatalogError;
use crate::generation::GenerationError;

/// Wire shape for API failures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API-level error taxonomy.
///
/// Every variant is terminal for the current request only; nothing
/// here is fatal to the process.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Required input absent; reported before any network activity
    MissingInput(String),
    InvalidRequest(String),
    NotFound(String),
    /// Generation backend lacks image-output capability
    PermissionDenied { message: String, details: String },
    /// Backend rejected the request; its status and message forwarded
    UpstreamRejected { status: u16, message: String },
    /// Backend answered without an image
    NoImageProduced,
    /// Network-level failure (garment fetch or backend call)
    Transport(String),
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingInput(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            ApiError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::NoImageProduced | ApiError::Transport(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let (error, details) = match self {
            ApiError::MissingInput(msg) => (msg.clone(), None),
            ApiError::InvalidRequest(msg) => (msg.clone(), None),
            ApiError::NotFound(msg) => (format!("Not found: {}", msg), None),
            ApiError::PermissionDenied { message, details } => {
                (message.clone(), Some(details.clone()))
            }
            ApiError::UpstreamRejected { message, .. } => (message.clone(), None),
            ApiError::NoImageProduced => ("No image generated".to_string(), None),
            ApiError::Transport(msg) => (msg.clone(), None),
            ApiError::InternalError(msg) => (msg.clone(), None),
        };
        ErrorResponse { error, details }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingInput(msg) => write!(f, "Missing input: {}", msg),
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::PermissionDenied { message, .. } => write!(f, "{}", message),
            ApiError::UpstreamRejected { status, message } => {
                write!(f, "Upstream rejected ({}): {}", status, message)
            }
            ApiError::NoImageProduced => write!(f, "No image generated"),
            ApiError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::PermissionDenied { ref details } => {
                let details = details.clone();
                ApiError::PermissionDenied {
                    message: err.to_string(),
                    details,
                }
            }
            GenerationError::UpstreamRejected { status, message } => {
                ApiError::UpstreamRejected { status, message }
            }
            GenerationError::NoImageProduced => ApiError::NoImageProduced,
            GenerationError::Transport(msg) => ApiError::Transport(msg),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => ApiError::NotFound(format!("product {}", id)),
            CatalogError::Storage(msg) => ApiError::InternalError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
