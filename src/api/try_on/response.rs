// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on response types

use serde::{Deserialize, Serialize};

use crate::generation::TryOnResult;

/// Response from a successful try-on generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TryOnResponse {
    /// Base64-encoded composite image, as delivered by the backend
    pub image: String,
    /// Media type of the composite
    pub mime_type: String,
}

impl From<TryOnResult> for TryOnResponse {
    fn from(result: TryOnResult) -> Self {
        Self {
            image: result.image,
            mime_type: result.media_type,
        }
    }
}
