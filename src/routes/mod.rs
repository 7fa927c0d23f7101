//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the pre-rendered home document at `/`, the global stylesheet the
//! root layout links, and a liveness probe. Everything else is a 404.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::assets::{GLOBALS_CSS, STYLESHEET_PATH};
use crate::state::AppState;

/// Build the application router with a freshly rendered `AppState`.
pub fn app() -> Router {
    router(AppState::new())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(STYLESHEET_PATH, get(stylesheet))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.home)
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], GLOBALS_CSS)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
