use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::sessions::{identify, CurrentUser};
use crate::errors::AppError;
use crate::jobs::filters::{split_by_filters, WageBand};
use crate::jobs::validation::{validate_job_payload, JobPayload};
use crate::models::application::ApplicationStatus;
use crate::models::job::{JobDetails, JobRow, JobStatus, JobWithEmployerRow};
use crate::models::user::Role;
use crate::state::AppState;

const JOB_WITH_EMPLOYER_SELECT: &str = "SELECT j.id, j.employer_id, j.title, j.description, \
     j.category, j.location, j.wage, j.required_skills, j.recommended_skills, j.status, \
     j.applications, j.created_at, j.completed_at, \
     p.name AS employer_name, p.email AS employer_email, p.phone AS employer_phone, \
     p.rating AS employer_rating, p.avatar_url AS employer_avatar_url \
     FROM jobs j JOIN profiles p ON p.id = j.employer_id";

#[derive(Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub wage: Option<String>,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub matched: Vec<JobDetails>,
    pub others: Vec<JobDetails>,
}

#[derive(Serialize)]
pub struct JobMutationResponse {
    pub job: JobRow,
    pub message_key: &'static str,
}

#[derive(Serialize)]
pub struct JobDeletedResponse {
    pub message_key: &'static str,
}

/// GET /api/v1/jobs
///
/// Open postings, newest first, split into `matched` and `others` by the
/// search and wage filters. Signed-in workers never see jobs they already
/// applied to; everyone else gets the full list.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<JobListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let viewer = identify(&state.db, &headers).await?;

    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let band = match params.wage.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            WageBand::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Invalid wage range: {raw}")))?,
        ),
        None => None,
    };

    let rows: Vec<JobWithEmployerRow> = match viewer.filter(|u| u.role == Role::Worker) {
        Some(worker) => {
            let sql = format!(
                "{JOB_WITH_EMPLOYER_SELECT} \
                 WHERE j.status = $1 \
                 AND NOT EXISTS (SELECT 1 FROM applications a \
                                 WHERE a.job_id = j.id AND a.worker_id = $2) \
                 ORDER BY j.created_at DESC"
            );
            sqlx::query_as(&sql)
                .bind(JobStatus::Open)
                .bind(worker.id)
                .fetch_all(&state.db)
                .await?
        }
        None => {
            let sql =
                format!("{JOB_WITH_EMPLOYER_SELECT} WHERE j.status = $1 ORDER BY j.created_at DESC");
            sqlx::query_as(&sql)
                .bind(JobStatus::Open)
                .fetch_all(&state.db)
                .await?
        }
    };

    let jobs: Vec<JobDetails> = rows.into_iter().map(JobDetails::from).collect();
    let (matched, others) = split_by_filters(jobs, search, band.as_ref());
    Ok(Json(JobListResponse { matched, others }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobDetails>, AppError> {
    let sql = format!("{JOB_WITH_EMPLOYER_SELECT} WHERE j.id = $1");
    let row: JobWithEmployerRow = sqlx::query_as(&sql)
        .bind(job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(row.into()))
}

/// GET /api/v1/jobs/mine
///
/// Every posting owned by the calling employer, any status, newest first.
pub async fn handle_my_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    user.require_employer()?;
    let jobs = sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<JobPayload>,
) -> Result<(StatusCode, Json<JobMutationResponse>), AppError> {
    user.require_employer()?;
    validate_job_payload(&mut payload)?;

    let job = sqlx::query_as::<_, JobRow>(
        "INSERT INTO jobs (id, employer_id, title, description, category, location, wage, \
                           required_skills, recommended_skills) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.category)
    .bind(&payload.location)
    .bind(payload.wage)
    .bind(&payload.required_skills)
    .bind(&payload.recommended_skills)
    .fetch_one(&state.db)
    .await?;

    info!("Employer {} posted job {}", user.id, job.id);
    Ok((
        StatusCode::CREATED,
        Json(JobMutationResponse {
            job,
            message_key: "jobs.posted",
        }),
    ))
}

/// PUT /api/v1/jobs/:id
///
/// Full replacement of the editable fields. Postings stop being editable
/// once they leave the open state.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
    Json(mut payload): Json<JobPayload>,
) -> Result<Json<JobMutationResponse>, AppError> {
    user.require_employer()?;
    let job = fetch_owned_job(&state.db, job_id, user.id).await?;
    if job.status != JobStatus::Open {
        return Err(AppError::Conflict(
            "Only open jobs can be edited".to_string(),
        ));
    }
    validate_job_payload(&mut payload)?;

    let job = sqlx::query_as::<_, JobRow>(
        "UPDATE jobs SET title = $2, description = $3, category = $4, location = $5, \
                         wage = $6, required_skills = $7, recommended_skills = $8, \
                         updated_at = NOW() \
         WHERE id = $1 \
         RETURNING *",
    )
    .bind(job.id)
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(&payload.category)
    .bind(&payload.location)
    .bind(payload.wage)
    .bind(&payload.required_skills)
    .bind(&payload.recommended_skills)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(JobMutationResponse {
        job,
        message_key: "jobs.updated",
    }))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobDeletedResponse>, AppError> {
    user.require_employer()?;
    let job = fetch_owned_job(&state.db, job_id, user.id).await?;
    if job.status != JobStatus::Open {
        return Err(AppError::Conflict(
            "Only open jobs can be deleted".to_string(),
        ));
    }

    sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(job.id)
        .execute(&state.db)
        .await?;

    info!("Employer {} deleted job {}", user.id, job.id);
    Ok(Json(JobDeletedResponse {
        message_key: "jobs.deleted",
    }))
}

/// POST /api/v1/jobs/:id/close
///
/// Stops a posting from taking applications. Refused while any application
/// is still pending review.
pub async fn handle_close_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobMutationResponse>, AppError> {
    user.require_employer()?;
    let job = fetch_owned_job(&state.db, job_id, user.id).await?;
    if !job.status.can_transition_to(JobStatus::Closed) {
        return Err(AppError::Conflict(
            "Only open jobs can be closed".to_string(),
        ));
    }
    ensure_no_pending_applications(&state.db, job.id).await?;

    let job = sqlx::query_as::<_, JobRow>(
        "UPDATE jobs SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(job.id)
    .bind(JobStatus::Closed)
    .fetch_one(&state.db)
    .await?;

    info!("Employer {} closed job {}", user.id, job.id);
    Ok(Json(JobMutationResponse {
        job,
        message_key: "jobs.closedSuccess",
    }))
}

/// POST /api/v1/jobs/:id/complete
///
/// Marks a closed posting as done, stamping `completed_at`. From here the
/// two sides can rate each other.
pub async fn handle_complete_job(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobMutationResponse>, AppError> {
    user.require_employer()?;
    let job = fetch_owned_job(&state.db, job_id, user.id).await?;
    if !job.status.can_transition_to(JobStatus::Completed) {
        return Err(AppError::Conflict(
            "Only closed jobs can be completed".to_string(),
        ));
    }
    ensure_no_pending_applications(&state.db, job.id).await?;

    let job = sqlx::query_as::<_, JobRow>(
        "UPDATE jobs SET status = $2, completed_at = NOW(), updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(job.id)
    .bind(JobStatus::Completed)
    .fetch_one(&state.db)
    .await?;

    info!("Employer {} completed job {}", user.id, job.id);
    Ok(Json(JobMutationResponse {
        job,
        message_key: "jobs.completedSuccess",
    }))
}

/// Owner-scoped fetch. Jobs that exist but belong to someone else read as
/// not found, so ownership never leaks through error codes.
async fn fetch_owned_job(db: &PgPool, job_id: Uuid, employer_id: Uuid) -> Result<JobRow, AppError> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1 AND employer_id = $2")
        .bind(job_id)
        .bind(employer_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
}

async fn ensure_no_pending_applications(db: &PgPool, job_id: Uuid) -> Result<(), AppError> {
    let pending: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1 AND status = $2")
            .bind(job_id)
            .bind(ApplicationStatus::Pending)
            .fetch_one(db)
            .await?;
    if pending > 0 {
        return Err(AppError::Conflict(
            "Please accept or reject all pending applications first".to_string(),
        ));
    }
    Ok(())
}
