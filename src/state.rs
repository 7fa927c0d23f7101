//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Pages take no input, so each document is rendered once at startup and
//! every request clones the same `Bytes` handle.

use axum::body::Bytes;

use crate::pages::home::render_home;

/// Shared application state. Clone is required by Axum; `Bytes` clones are
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub home: Bytes,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { home: Bytes::from(render_home()) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
