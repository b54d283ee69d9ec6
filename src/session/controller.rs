// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Try-on session controller

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use tracing::debug;

use crate::generation::{
    GarmentSource, GenerationError, TryOnRequest, TryOnResult, TryOnService,
    DEFAULT_PRODUCT_LABEL,
};
use crate::imaging::{downscale_for_upload, ImageAsset, ImagePrepError};

/// Session lifecycle states.
///
/// `Idle -> Collecting -> Generating -> {Succeeded, Failed}`, with both
/// terminal states returning to `Collecting` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Collecting,
    Generating,
    Succeeded,
    Failed,
}

/// Errors from invalid session transitions or unusable inputs
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a user photo and a garment are both required")]
    InputsIncomplete,

    #[error("a generation is already in flight")]
    AlreadyGenerating,

    #[error("no result to download")]
    NoResult,

    #[error("result image is not valid base64: {0}")]
    CorruptResult(String),

    #[error(transparent)]
    ImagePrep(#[from] ImagePrepError),
}

/// One interactive try-on session.
///
/// Single-threaded by construction: the embedding UI calls these
/// methods from its event loop. Only one generation may be in flight;
/// there is no way to abort one once issued — the elapsed counter is
/// purely cosmetic.
#[derive(Debug)]
pub struct TryOnSession {
    state: SessionState,
    user_photo: Option<ImageAsset>,
    garment: Option<GarmentSource>,
    product_label: String,
    result: Option<TryOnResult>,
    error: Option<String>,
    elapsed_secs: u64,
}

impl Default for TryOnSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TryOnSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            user_photo: None,
            garment: None,
            product_label: DEFAULT_PRODUCT_LABEL.to_string(),
            result: None,
            error: None,
            elapsed_secs: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&TryOnResult> {
        self.result.as_ref()
    }

    /// Enter `Collecting`, clearing any previous inputs and outcome
    pub fn begin(&mut self) {
        self.state = SessionState::Collecting;
        self.user_photo = None;
        self.garment = None;
        self.product_label = DEFAULT_PRODUCT_LABEL.to_string();
        self.result = None;
        self.error = None;
        self.elapsed_secs = 0;
    }

    /// Accept the user's photo, downscaling oversized captures before
    /// they ever leave the session
    pub fn set_user_photo(
        &mut self,
        bytes: Vec<u8>,
        media_type: &str,
    ) -> Result<(), SessionError> {
        let asset = downscale_for_upload(&ImageAsset::new(bytes, media_type))?;
        self.user_photo = Some(asset);
        Ok(())
    }

    /// Accept an uploaded garment image, downscaled like the user photo
    pub fn set_garment_upload(
        &mut self,
        bytes: Vec<u8>,
        media_type: &str,
    ) -> Result<(), SessionError> {
        let asset = downscale_for_upload(&ImageAsset::new(bytes, media_type))?;
        self.garment = Some(GarmentSource::Upload(asset));
        Ok(())
    }

    /// Point the garment at a remote URL; the server fetches it
    pub fn set_garment_url(&mut self, url: impl Into<String>) {
        self.garment = Some(GarmentSource::Url(url.into()));
    }

    /// Pre-select a catalog product as the garment
    pub fn set_catalog_garment(&mut self, name: impl Into<String>, asset: ImageAsset) {
        let name = name.into();
        self.product_label = name.clone();
        self.garment = Some(GarmentSource::CatalogProduct { name, asset });
    }

    /// Whether the generate trigger should be enabled
    pub fn ready_to_generate(&self) -> bool {
        self.state == SessionState::Collecting
            && self.user_photo.is_some()
            && self.garment.is_some()
    }

    /// Transition `Collecting -> Generating`, yielding the request to
    /// submit. Refused while a generation is in flight or with
    /// incomplete inputs.
    pub fn begin_generation(&mut self) -> Result<TryOnRequest, SessionError> {
        if self.state == SessionState::Generating {
            return Err(SessionError::AlreadyGenerating);
        }
        let (user_photo, garment) = match (&self.user_photo, &self.garment) {
            (Some(u), Some(g)) => (u.clone(), g.clone()),
            _ => return Err(SessionError::InputsIncomplete),
        };

        self.state = SessionState::Generating;
        self.elapsed_secs = 0;
        self.error = None;

        Ok(TryOnRequest {
            user_photo,
            garment,
            product_label: self.product_label.clone(),
        })
    }

    /// Advance the progress counter by one second. Only meaningful
    /// while `Generating`; cosmetic, carries no cancellation semantics.
    pub fn tick(&mut self) {
        if self.state == SessionState::Generating {
            self.elapsed_secs += 1;
        }
    }

    /// Record a successful generation
    pub fn complete(&mut self, result: TryOnResult) {
        debug!("Session succeeded after {}s", self.elapsed_secs);
        self.result = Some(result);
        self.state = SessionState::Succeeded;
    }

    /// Record a failed generation with a human-readable message
    pub fn fail(&mut self, error: &GenerationError) {
        self.error = Some(error.to_string());
        self.state = SessionState::Failed;
    }

    /// Run one full generation round trip against a service.
    ///
    /// Convenience wrapper over `begin_generation` / `complete` /
    /// `fail` for embedders that do not need to interleave ticks.
    pub async fn generate(&mut self, service: &dyn TryOnService) -> Result<(), SessionError> {
        let request = self.begin_generation()?;
        match service.submit(request).await {
            Ok(result) => self.complete(result),
            Err(e) => self.fail(&e),
        }
        Ok(())
    }

    /// Decode the held result for local saving.
    ///
    /// Returns a filename derived from the result media type plus the
    /// decoded image bytes.
    pub fn download(&self) -> Result<(String, Vec<u8>), SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        let bytes = STANDARD
            .decode(&result.image)
            .map_err(|e| SessionError::CorruptResult(e.to_string()))?;
        let extension = result
            .media_type
            .split('/')
            .nth(1)
            .filter(|s| !s.is_empty())
            .unwrap_or("png");
        Ok((format!("try-on-result.{}", extension), bytes))
    }

    /// Return to `Collecting` from either terminal state, clearing
    /// inputs and outcome
    pub fn reset(&mut self) {
        self.begin();
    }
}
