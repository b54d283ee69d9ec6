// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Virtual try-on API endpoint module
//!
//! Provides POST /api/virtual-try-on for synthesizing a composite of a
//! person photo wearing a garment.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::virtual_try_on_handler;
pub use request::TryOnForm;
pub use response::TryOnResponse;
