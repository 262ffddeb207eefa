//! Shared API types, helpers, and the health probe.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

pub mod alumni;
pub mod update;

// ── Shared response types ────────────────────────────────────────

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

pub type ApiResult<T> = Result<T, (axum::http::StatusCode, Json<ErrorResponse>)>;

// ── Helpers ──────────────────────────────────────────────────────

pub(crate) fn require_pg(state: &AppState) -> ApiResult<&sqlx::PgPool> {
    state.pg_pool.as_ref().ok_or_else(|| {
        (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "PostgreSQL not configured".into(),
            }),
        )
    })
}

pub(crate) fn internal_error(e: impl std::fmt::Display) -> (axum::http::StatusCode, Json<ErrorResponse>) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub(crate) fn not_found(resource: &str, id: i64) -> (axum::http::StatusCode, Json<ErrorResponse>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("{} not found: {}", resource, id),
        }),
    )
}

pub(crate) fn bad_request(msg: impl Into<String>) -> (axum::http::StatusCode, Json<ErrorResponse>) {
    (
        axum::http::StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: msg.into() }),
    )
}

// ── Health ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health -- liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        database: if state.pg_pool.is_some() {
            "connected"
        } else {
            "unconfigured"
        },
    })
}
