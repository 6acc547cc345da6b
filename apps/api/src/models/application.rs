use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::JobStatus;

/// Review state of an application. Only the job owner moves it out of
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// One row per (job, worker) pair. `worker_rating` is the employer's 1-5
/// rating of the worker, set once after the job completes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub status: ApplicationStatus,
    pub worker_rating: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat row for the employer's applicant list: application joined with the
/// worker profile.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithWorkerRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub status: ApplicationStatus,
    pub worker_rating: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub worker_id: Uuid,
    pub worker_name: String,
    pub worker_email: String,
    pub worker_profile_rating: f64,
    pub worker_completed_jobs: i32,
    pub worker_location: String,
    pub worker_skills: Vec<String>,
    pub worker_avatar_url: Option<String>,
    pub worker_bio: Option<String>,
}

/// Flat row for a worker's own application list: application joined with the
/// job, its employer, and the rating this worker gave the employer (if any).
#[derive(Debug, Clone, FromRow)]
pub struct AppliedJobRow {
    pub application_id: Uuid,
    pub application_status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub my_employer_rating: Option<i16>,
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub wage: f64,
    pub required_skills: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub status: JobStatus,
    pub applications: i32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub employer_name: String,
    pub employer_email: String,
    pub employer_phone: Option<String>,
    pub employer_rating: f64,
    pub employer_avatar_url: Option<String>,
}
