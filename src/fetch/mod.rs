// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Remote garment image fetching
//!
//! Fetches garment bytes when a try-on request specifies the garment by
//! URL. One attempt per request, no retries: a failed fetch against an
//! arbitrary third-party host is reported immediately.

use async_trait::async_trait;
use reqwest::Client;
use std::net::IpAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::{Host, Url};

/// Per-fetch timeout for third-party image hosts
const FETCH_TIMEOUT_SECS: u64 = 20;

/// Media type assumed when the host omits a Content-Type
const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Raw bytes fetched from a garment URL
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

/// Garment fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("timeout fetching: {0}")]
    Timeout(String),

    #[error("fetch failed: {0}")]
    Http(String),

    #[error("HTTP {0} for: {1}")]
    HttpStatus(u16, String),

    #[error("URL did not return an image ({1}): {0}")]
    NotAnImage(String, String),

    #[error("unsafe URL blocked: {0}")]
    UnsafeUrl(String),
}

/// Fetches garment image bytes from a remote URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GarmentFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, FetchError>;
}

/// Reqwest-backed fetcher with SSRF screening
pub struct HttpGarmentFetcher {
    client: Client,
}

impl HttpGarmentFetcher {
    pub fn new() -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }

    /// Check that a URL is safe to fetch (http/https, no localhost or
    /// private-range hosts)
    pub fn is_safe_url(url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => !domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(ip)) => is_public_ip(IpAddr::V4(ip)),
            Some(Host::Ipv6(ip)) => is_public_ip(IpAddr::V6(ip)),
            None => false,
        }
    }
}

fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast())
        }
        IpAddr::V6(v6) => !(v6.is_loopback() || v6.is_unspecified()),
    }
}

#[async_trait]
impl GarmentFetcher for HttpGarmentFetcher {
    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, FetchError> {
        if !Self::is_safe_url(url) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        debug!("Fetching garment image from: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let media_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());

        // A 200 with an HTML body is a dead image link, not a garment
        if !media_type.starts_with("image/") {
            return Err(FetchError::NotAnImage(url.to_string(), media_type));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if bytes.is_empty() {
            return Err(FetchError::NotAnImage(
                url.to_string(),
                "empty body".to_string(),
            ));
        }

        info!("Fetched {} garment bytes from: {}", bytes.len(), url);

        Ok(FetchedImage {
            bytes: bytes.to_vec(),
            media_type,
        })
    }
}
