// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-driven service configuration

use std::env;
use thiserror::Error;

/// Default generation backend endpoint
const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default image-capable generation model
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-image-preview";

const DEFAULT_API_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// API key for the generation backend (required)
    pub gemini_api_key: String,
    /// Generation backend base URL
    pub gemini_endpoint: String,
    /// Generation model identifier
    pub gemini_model: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required; everything else has defaults:
    /// `API_PORT` (8080), `GEMINI_API_ENDPOINT`, `GEMINI_MODEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;

        let api_port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("API_PORT", raw))?,
            Err(_) => DEFAULT_API_PORT,
        };

        let gemini_endpoint = env::var("GEMINI_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_GEMINI_ENDPOINT.to_string());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            api_port,
            gemini_api_key,
            gemini_endpoint,
            gemini_model,
        })
    }
}
