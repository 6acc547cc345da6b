use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::profile::{EmployerSummary, DEFAULT_AVATAR_URL};

/// Lifecycle of a posting. A job is edited and applied to while `Open`,
/// stops taking applications when `Closed`, and ends as `Completed` once the
/// work is done and workers can be rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
    Completed,
}

impl JobStatus {
    /// Owner-driven transitions move strictly forward: open to closed,
    /// closed to completed.
    pub fn can_transition_to(self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Open, JobStatus::Closed) | (JobStatus::Closed, JobStatus::Completed)
        )
    }
}

/// One row per posting. `applications` is a derived count maintained by a
/// database trigger.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobRow {
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
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Flat row for job queries that join the employer profile.
#[derive(Debug, Clone, FromRow)]
pub struct JobWithEmployerRow {
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

/// Job shape returned to workers and the public listing, employer card
/// included.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetails {
    pub id: Uuid,
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
    pub employer: EmployerSummary,
}

impl From<JobWithEmployerRow> for JobDetails {
    fn from(row: JobWithEmployerRow) -> Self {
        JobDetails {
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_forward_transitions() {
        assert!(JobStatus::Open.can_transition_to(JobStatus::Closed));
        assert!(JobStatus::Closed.can_transition_to(JobStatus::Completed));
    }

    #[test]
    fn test_job_status_rejects_skips_and_reversals() {
        assert!(!JobStatus::Open.can_transition_to(JobStatus::Completed));
        assert!(!JobStatus::Closed.can_transition_to(JobStatus::Open));
        assert!(!JobStatus::Completed.can_transition_to(JobStatus::Closed));
        assert!(!JobStatus::Completed.can_transition_to(JobStatus::Open));
        assert!(!JobStatus::Open.can_transition_to(JobStatus::Open));
    }
}
