//! HTTP router construction.
//!
//! Assembles all Axum routes, middleware, and the static assets service into
//! a single `Router`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use alumni_core::config::ASSETS_PUBLIC_PREFIX;

use crate::api;
use crate::state::AppState;

/// Uploads can carry video; axum's 2 MB default is far too small.
const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.assets_dir);

    Router::new()
        .route("/health", get(api::health))
        .route("/api/alumni", get(api::alumni::alumni_list))
        .route("/api/alumni/{id}", get(api::alumni::alumni_get))
        .route("/api/alumni/{id}/jobs", get(api::alumni::alumni_jobs))
        .route("/api/alumni/update/{id}", post(api::update::alumni_update))
        .nest_service(ASSETS_PUBLIC_PREFIX, assets)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
