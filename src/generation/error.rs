// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generation error taxonomy

use thiserror::Error;

/// User-facing explanation when the backend refuses image output
pub const PERMISSION_DENIED_MESSAGE: &str = "Your Gemini API key does not have 'Image Generation' \
     permissions yet. This is a limited Google preview feature. Please use an account with Image \
     Generation enabled.";

/// Classified failures of a try-on generation attempt.
///
/// Every error is terminal for the current attempt only; the session
/// always returns to a retryable state.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The backend lacks image-generation capability for these
    /// credentials. Needs an account change, not a retry.
    #[error("{PERMISSION_DENIED_MESSAGE}")]
    PermissionDenied { details: String },

    /// The backend returned a structured error unrelated to permissions
    #[error("generation backend rejected the request: {message}")]
    UpstreamRejected { status: u16, message: String },

    /// The backend responded successfully but without image content
    #[error("no image generated")]
    NoImageProduced,

    /// Network-level failure reaching the backend or a garment host,
    /// or unusable input bytes
    #[error("transport failure: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Optional detail string carried alongside the main message
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::PermissionDenied { details } => Some(details),
            _ => None,
        }
    }
}
