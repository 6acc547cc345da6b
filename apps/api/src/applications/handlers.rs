use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::sessions::CurrentUser;
use crate::errors::{is_unique_violation, AppError};
use crate::models::application::{
    ApplicationRow, ApplicationStatus, ApplicationWithWorkerRow, AppliedJobRow,
};
use crate::models::job::{JobDetails, JobRow, JobStatus};
use crate::models::profile::{EmployerSummary, WorkerSummary, DEFAULT_AVATAR_URL};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ApplicationListQuery {
    pub status: Option<ApplicationStatus>,
}

#[derive(Deserialize)]
pub struct ReviewApplicationRequest {
    pub status: ApplicationStatus,
}

#[derive(Serialize)]
pub struct ApplicationSubmittedResponse {
    pub application: ApplicationRow,
    pub message_key: &'static str,
}

#[derive(Serialize)]
pub struct ApplicationReviewedResponse {
    pub application: ApplicationRow,
    pub message_key: &'static str,
}

/// Application as the job owner sees it, applicant card included.
#[derive(Serialize)]
pub struct ApplicationView {
    pub id: Uuid,
    pub job_id: Uuid,
    pub status: ApplicationStatus,
    pub worker_rating: Option<i16>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub worker: WorkerSummary,
}

impl From<ApplicationWithWorkerRow> for ApplicationView {
    fn from(row: ApplicationWithWorkerRow) -> Self {
        ApplicationView {
            id: row.id,
            job_id: row.job_id,
            status: row.status,
            worker_rating: row.worker_rating,
            created_at: row.created_at,
            worker: WorkerSummary {
                id: row.worker_id,
                name: row.worker_name,
                email: row.worker_email,
                rating: row.worker_profile_rating,
                completed_jobs: row.worker_completed_jobs,
                location: row.worker_location,
                skills: row.worker_skills,
                avatar_url: row
                    .worker_avatar_url
                    .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
                bio: row.worker_bio,
            },
        }
    }
}

/// Application as the worker sees it in their history, with the job, its
/// employer, and the rating they gave that employer (if any).
#[derive(Serialize)]
pub struct AppliedJobView {
    pub application_id: Uuid,
    pub application_status: ApplicationStatus,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub employer_rating: Option<i16>,
    pub job: JobDetails,
}

impl From<AppliedJobRow> for AppliedJobView {
    fn from(row: AppliedJobRow) -> Self {
        AppliedJobView {
            application_id: row.application_id,
            application_status: row.application_status,
            applied_at: row.applied_at,
            employer_rating: row.my_employer_rating,
            job: JobDetails {
                id: row.id,
                title: row.title,
                description: row.description,
                category: row.category,
                location: row.location,
                wage: row.wage,
                required_skills: row.required_skills,
                recommended_skills: row.recommended_skills,
                status: row.status,
                applications: row.applications,
                created_at: row.created_at,
                completed_at: row.completed_at,
                employer: EmployerSummary {
                    id: row.employer_id,
                    name: row.employer_name,
                    email: row.employer_email,
                    phone: row.employer_phone,
                    rating: row.employer_rating,
                    avatar_url: row
                        .employer_avatar_url
                        .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
                },
            },
        }
    }
}

/// POST /api/v1/jobs/:id/apply
///
/// One application per worker per job, enforced by a unique index rather
/// than a read-then-insert race.
pub async fn handle_apply(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApplicationSubmittedResponse>), AppError> {
    user.require_worker()?;

    let job = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    if job.status != JobStatus::Open {
        return Err(AppError::Conflict(
            "This job is no longer open".to_string(),
        ));
    }

    let inserted = sqlx::query_as::<_, ApplicationRow>(
        "INSERT INTO applications (id, job_id, worker_id) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(job.id)
    .bind(user.id)
    .fetch_one(&state.db)
    .await;

    let application = match inserted {
        Ok(application) => application,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Conflict(
                "You have already applied to this job".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    info!("Worker {} applied to job {}", user.id, job.id);
    Ok((
        StatusCode::CREATED,
        Json(ApplicationSubmittedResponse {
            application,
            message_key: "jobs.applicationSubmitted",
        }),
    ))
}

/// GET /api/v1/jobs/:id/applications
///
/// Applicants for one of the caller's postings, newest first, optionally
/// filtered by review status.
pub async fn handle_job_applications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<ApplicationListQuery>,
) -> Result<Json<Vec<ApplicationView>>, AppError> {
    user.require_employer()?;

    let owns_job: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM jobs WHERE id = $1 AND employer_id = $2")
            .bind(job_id)
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;
    if owns_job.is_none() {
        return Err(AppError::NotFound("Job not found".to_string()));
    }

    const BASE: &str = "SELECT a.id, a.job_id, a.status, a.worker_rating, a.created_at, \
         w.id AS worker_id, w.name AS worker_name, w.email AS worker_email, \
         w.rating AS worker_profile_rating, w.completed_jobs AS worker_completed_jobs, \
         w.location AS worker_location, w.skills AS worker_skills, \
         w.avatar_url AS worker_avatar_url, w.bio AS worker_bio \
         FROM applications a JOIN profiles w ON w.id = a.worker_id \
         WHERE a.job_id = $1";

    let rows: Vec<ApplicationWithWorkerRow> = match params.status {
        Some(status) => {
            let sql = format!("{BASE} AND a.status = $2 ORDER BY a.created_at DESC");
            sqlx::query_as(&sql)
                .bind(job_id)
                .bind(status)
                .fetch_all(&state.db)
                .await?
        }
        None => {
            let sql = format!("{BASE} ORDER BY a.created_at DESC");
            sqlx::query_as(&sql).bind(job_id).fetch_all(&state.db).await?
        }
    };

    Ok(Json(rows.into_iter().map(ApplicationView::from).collect()))
}

/// GET /api/v1/applications/mine
///
/// The caller's application history across all jobs, newest first.
pub async fn handle_my_applications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<AppliedJobView>>, AppError> {
    user.require_worker()?;

    let rows: Vec<AppliedJobRow> = sqlx::query_as(
        "SELECT a.id AS application_id, a.status AS application_status, \
                a.created_at AS applied_at, er.rating AS my_employer_rating, \
                j.id, j.employer_id, j.title, j.description, j.category, j.location, \
                j.wage, j.required_skills, j.recommended_skills, j.status, \
                j.applications, j.created_at, j.completed_at, \
                p.name AS employer_name, p.email AS employer_email, \
                p.phone AS employer_phone, p.rating AS employer_rating, \
                p.avatar_url AS employer_avatar_url \
         FROM applications a \
         JOIN jobs j ON j.id = a.job_id \
         JOIN profiles p ON p.id = j.employer_id \
         LEFT JOIN employer_ratings er ON er.job_id = a.job_id AND er.worker_id = a.worker_id \
         WHERE a.worker_id = $1 \
         ORDER BY a.created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows.into_iter().map(AppliedJobView::from).collect()))
}

/// PATCH /api/v1/applications/:id
///
/// Accepts or rejects a pending application on one of the caller's jobs.
/// The decision is final.
pub async fn handle_review_application(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(application_id): Path<Uuid>,
    Json(payload): Json<ReviewApplicationRequest>,
) -> Result<Json<ApplicationReviewedResponse>, AppError> {
    user.require_employer()?;
    if payload.status == ApplicationStatus::Pending {
        return Err(AppError::Validation(
            "Status must be accepted or rejected".to_string(),
        ));
    }

    let application = sqlx::query_as::<_, ApplicationRow>(
        "SELECT a.* FROM applications a \
         JOIN jobs j ON j.id = a.job_id \
         WHERE a.id = $1 AND j.employer_id = $2",
    )
    .bind(application_id)
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if application.status != ApplicationStatus::Pending {
        return Err(AppError::Conflict(
            "Application has already been reviewed".to_string(),
        ));
    }

    let application = sqlx::query_as::<_, ApplicationRow>(
        "UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(application.id)
    .bind(payload.status)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Employer {} reviewed application {}: {:?}",
        user.id, application.id, application.status
    );
    let message_key = if application.status == ApplicationStatus::Accepted {
        "jobs.accepted"
    } else {
        "jobs.rejected"
    };
    Ok(Json(ApplicationReviewedResponse {
        application,
        message_key,
    }))
}
