// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Interactive try-on session state machine
//!
//! Drives one user-facing session: collect the two images, trigger
//! generation, track elapsed time for progress display, and hold the
//! result or failure. See [`controller::TryOnSession`].

pub mod controller;

pub use controller::{SessionError, SessionState, TryOnSession};
