//! Alumni update ingestion endpoint.
//!
//! `POST /api/alumni/update/:id`, multipart/form-data. The request walks a
//! fixed flow: receive and validate the upload, verify the canonical record
//! exists, write the snapshot row, write the job entries. Every failure is
//! terminal for the request; there are no retries.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::Json;
use tracing::{error, info};

use crate::state::AppState;
use crate::{intake, writer};

use super::{bad_request, internal_error, require_pg, ApiResult, SuccessResponse};

/// POST /api/alumni/update/:id -- accept an edit submission for a canonical
/// alumni record.
pub async fn alumni_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<SuccessResponse>> {
    // Receiving: drain and validate the multipart stream. Runs before any
    // database access, so a bad upload never reaches the writer.
    let form = intake::collect(multipart, &state.assets_dir)
        .await
        .map_err(|e| {
            if e.is_client_error() {
                bad_request(e.to_string())
            } else {
                internal_error(e)
            }
        })?;

    let pool = require_pg(&state)?;

    // Verifying: the canonical record must exist before we accept an edit.
    let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM alumni_infos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(internal_error)?;
    if exists.is_none() {
        return Err(bad_request("Original alumni not found"));
    }

    // Writing: snapshot plus jobs, one transaction.
    let outcome = writer::persist_update(pool, id, &form).await.map_err(|e| {
        error!("Failed to persist update for alumni {}: {}", id, e);
        internal_error(format!("Insert failed: {e}"))
    })?;

    info!(
        "Alumni {} updated: snapshot {} with {} job(s)",
        id, outcome.snapshot_id, outcome.job_count
    );

    Ok(Json(SuccessResponse {
        success: true,
        message: outcome.message().to_string(),
    }))
}
