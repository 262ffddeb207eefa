//! Canonical alumni read endpoints: paginated list, detail, job history.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

use super::{internal_error, not_found, require_pg, ApiResult};

const PAGE_SIZE: i64 = 25;

// ── Types ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AlumniListRow {
    pub id: i64,
    pub name: Option<String>,
    pub regcode: Option<String>,
    pub batch: Option<String>,
    pub passing_year: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub image_url: Option<String>,
    pub linkedin_link: Option<String>,
    pub facebook_link: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AlumniDetail {
    pub id: i64,
    pub name: Option<String>,
    pub regcode: Option<String>,
    pub batch: Option<String>,
    pub passing_year: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub dob: Option<String>,
    pub mailing_address: Option<String>,
    pub permanent_address: Option<String>,
    pub image_url: Option<String>,
    pub linkedin_link: Option<String>,
    pub facebook_link: Option<String>,
    pub instagram_link: Option<String>,
    pub twitter_link: Option<String>,
    pub short_interview_video: Option<String>,
    pub helping_alumni: Option<String>,
    pub job_seeker: Option<String>,
    pub interested_to_join_reunion: Option<String>,
    pub interested_to_form_club: Option<String>,
    pub cv_or_resume: Option<String>,
    pub higher_studies: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct JobRow {
    pub id: i64,
    pub alumni_modified_id: i64,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub job_position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub department: Option<String>,
    pub responsibility: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// ── Handlers ─────────────────────────────────────────────────────

/// GET /api/alumni?page=N -- paginated canonical list, 25 per page.
pub async fn alumni_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<AlumniListRow>>> {
    let pool = require_pg(&state)?;
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page - 1) * PAGE_SIZE;

    let rows = sqlx::query_as::<_, AlumniListRow>(
        "SELECT id, name, regcode, batch, passing_year, department,
                email, phone_no, image_url, linkedin_link, facebook_link
         FROM alumni_infos
         ORDER BY id ASC
         LIMIT $1 OFFSET $2",
    )
    .bind(PAGE_SIZE)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(internal_error)?;
    Ok(Json(rows))
}

/// GET /api/alumni/:id -- full canonical record.
pub async fn alumni_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<AlumniDetail>> {
    let pool = require_pg(&state)?;
    let row = sqlx::query_as::<_, AlumniDetail>(
        "SELECT id, name, regcode, batch, passing_year, department, email,
                phone_no, dob, mailing_address, permanent_address, image_url,
                linkedin_link, facebook_link, instagram_link, twitter_link,
                short_interview_video, helping_alumni, job_seeker,
                interested_to_join_reunion, interested_to_form_club,
                cv_or_resume, higher_studies, remarks
         FROM alumni_infos WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(internal_error)?
    .ok_or_else(|| not_found("Alumni", id))?;
    Ok(Json(row))
}

/// GET /api/alumni/:id/jobs -- job entries across every snapshot of this
/// canonical record, oldest first.
pub async fn alumni_jobs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<JobRow>>> {
    let pool = require_pg(&state)?;
    let rows = sqlx::query_as::<_, JobRow>(
        "SELECT j.id, j.alumni_modified_id, j.company_name, j.company_address,
                j.job_position, j.start_date, j.end_date, j.department,
                j.responsibility, j.created_at, j.updated_at
         FROM alumni_job_details_modified j
         JOIN alumni_infos_modified a ON j.alumni_modified_id = a.id
         WHERE a.transcript_id = $1
         ORDER BY j.id ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(internal_error)?;
    Ok(Json(rows))
}
