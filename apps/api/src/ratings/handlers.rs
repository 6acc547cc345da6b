use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::info;
use uuid::Uuid;

use crate::auth::sessions::CurrentUser;
use crate::errors::{is_unique_violation, AppError};
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::{JobRow, JobStatus};
use crate::models::rating::{validate_rating, EmployerRatingRow, MAX_RATING, MIN_RATING};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RatingRequest {
    pub rating: i16,
}

#[derive(Serialize)]
pub struct WorkerRatedResponse {
    pub application: ApplicationRow,
    pub message_key: &'static str,
}

#[derive(Serialize)]
pub struct EmployerRatedResponse {
    pub rating: EmployerRatingRow,
    pub message_key: &'static str,
}

#[derive(FromRow)]
struct RatableApplicationRow {
    id: Uuid,
    status: ApplicationStatus,
    worker_rating: Option<i16>,
    job_status: JobStatus,
}

/// POST /api/v1/applications/:id/worker-rating
///
/// The employer rates an accepted worker once the job is completed. The
/// rating lands on the application row; a trigger folds it into the worker's
/// profile average.
pub async fn handle_rate_worker(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(application_id): Path<Uuid>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<WorkerRatedResponse>, AppError> {
    user.require_employer()?;
    ensure_valid_rating(payload.rating)?;

    let application = sqlx::query_as::<_, RatableApplicationRow>(
        "SELECT a.id, a.status, a.worker_rating, j.status AS job_status \
         FROM applications a \
         JOIN jobs j ON j.id = a.job_id \
         WHERE a.id = $1 AND j.employer_id = $2",
    )
    .bind(application_id)
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if application.job_status != JobStatus::Completed {
        return Err(AppError::Conflict(
            "Job must be completed before rating workers".to_string(),
        ));
    }
    if application.status != ApplicationStatus::Accepted {
        return Err(AppError::Conflict(
            "Only accepted workers can be rated".to_string(),
        ));
    }
    if application.worker_rating.is_some() {
        return Err(AppError::Conflict(
            "This worker has already been rated for this job".to_string(),
        ));
    }

    let application = sqlx::query_as::<_, ApplicationRow>(
        "UPDATE applications SET worker_rating = $2, updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(application.id)
    .bind(payload.rating)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Employer {} rated worker {} on application {}",
        user.id, application.worker_id, application.id
    );
    Ok(Json(WorkerRatedResponse {
        application,
        message_key: "jobs.ratingSubmitted",
    }))
}

/// POST /api/v1/jobs/:id/employer-rating
///
/// A worker accepted on the job rates the employer once it is completed.
/// One rating per worker per job, enforced by a unique index.
pub async fn handle_rate_employer(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(job_id): Path<Uuid>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<EmployerRatedResponse>, AppError> {
    user.require_worker()?;
    ensure_valid_rating(payload.rating)?;

    let job = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    if job.status != JobStatus::Completed {
        return Err(AppError::Conflict(
            "Job must be completed before rating the employer".to_string(),
        ));
    }

    let application_status: Option<ApplicationStatus> =
        sqlx::query_scalar("SELECT status FROM applications WHERE job_id = $1 AND worker_id = $2")
            .bind(job.id)
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;
    if application_status != Some(ApplicationStatus::Accepted) {
        return Err(AppError::Forbidden(
            "Only workers accepted for this job can rate the employer".to_string(),
        ));
    }

    let inserted = sqlx::query_as::<_, EmployerRatingRow>(
        "INSERT INTO employer_ratings (id, job_id, employer_id, worker_id, rating) \
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(job.id)
    .bind(job.employer_id)
    .bind(user.id)
    .bind(payload.rating)
    .fetch_one(&state.db)
    .await;

    let rating = match inserted {
        Ok(rating) => rating,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Conflict(
                "You have already rated this employer for this job".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "Worker {} rated employer {} on job {}",
        user.id, job.employer_id, job.id
    );
    Ok(Json(EmployerRatedResponse {
        rating,
        message_key: "jobs.ratingSubmitted",
    }))
}

fn ensure_valid_rating(rating: i16) -> Result<(), AppError> {
    if !validate_rating(rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}
