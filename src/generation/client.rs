// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini `generateContent` client for try-on image synthesis

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::error::GenerationError;
use super::payload::build_payload;
use super::types::{GenerationBackend, TryOnResult};
use crate::imaging::ImageAsset;

/// Outbound call timeout. The backend call was historically unbounded;
/// a hung call now surfaces as a transport failure instead of hanging
/// the session forever.
const GENERATE_TIMEOUT_SECS: u64 = 120;

/// Media type assumed when the backend omits one on its image part
const DEFAULT_RESULT_MEDIA_TYPE: &str = "image/png";

/// Client for the external generation backend
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

// --- Backend response types ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    error: Option<GeminiErrorBody>,
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(rename = "inlineData", alias = "inline_data")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
struct GeminiInlineData {
    data: Option<String>,
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: Option<String>,
}

impl GeminiClient {
    /// Create a new client against `endpoint` (no trailing slash needed)
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Generation client configured: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

/// Interpret the backend's reply, in priority order:
/// 1. error message referencing output modality -> permission denied
/// 2. non-success HTTP status -> upstream rejection, message forwarded
/// 3. no inline image part -> no image produced
/// 4. first inline image part -> result
fn interpret_response(status: StatusCode, body: &str) -> Result<TryOnResult, GenerationError> {
    let parsed: GeminiResponse = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(e) => {
            if status.is_success() {
                return Err(GenerationError::Transport(format!(
                    "unparseable backend response: {}",
                    e
                )));
            }
            return Err(GenerationError::UpstreamRejected {
                status: status.as_u16(),
                message: "API Error".to_string(),
            });
        }
    };

    if let Some(message) = parsed.error.as_ref().and_then(|e| e.message.as_deref()) {
        if message.contains("modality") {
            return Err(GenerationError::PermissionDenied {
                details: message.to_string(),
            });
        }
    }

    if !status.is_success() {
        let message = parsed
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| "API Error".to_string());
        return Err(GenerationError::UpstreamRejected {
            status: status.as_u16(),
            message,
        });
    }

    let inline = parsed
        .candidates
        .into_iter()
        .flatten()
        .filter_map(|c| c.content)
        .filter_map(|c| c.parts)
        .flatten()
        .find_map(|p| p.inline_data);

    match inline.and_then(|d| d.data.map(|data| (data, d.mime_type))) {
        Some((image, mime_type)) => Ok(TryOnResult {
            image,
            media_type: mime_type.unwrap_or_else(|| DEFAULT_RESULT_MEDIA_TYPE.to_string()),
        }),
        None => Err(GenerationError::NoImageProduced),
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(
        &self,
        user: &ImageAsset,
        garment: &ImageAsset,
        product_label: &str,
    ) -> Result<TryOnResult, GenerationError> {
        let payload = build_payload(user, garment, product_label);

        let url = self.generate_url();
        debug!("Generation POST {}:generateContent", self.model);

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Generation request failed: {}", e);
                if e.is_timeout() {
                    GenerationError::Transport("generation backend timed out".to_string())
                } else {
                    GenerationError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(r) => info!(
                "Try-on image generated: media_type={}, {}ms",
                r.media_type,
                start.elapsed().as_millis()
            ),
            Err(e) => warn!("Try-on generation failed: {}", e),
        }
        result
    }
}
