use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::Role;

/// Stock avatar served whenever a user never uploaded one.
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?fit=facearea&facepad=2&w=256&h=256&q=80";

/// One row per account. `rating` and `completed_jobs` are derived columns
/// maintained by database triggers, never written by handlers.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub rating: f64,
    pub completed_jobs: i32,
    pub location: String,
    pub skills: Vec<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile shape returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub rating: f64,
    pub completed_jobs: i32,
    pub location: String,
    pub skills: Vec<String>,
    pub avatar_url: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            rating: row.rating,
            completed_jobs: row.completed_jobs,
            location: row.location,
            skills: row.skills,
            avatar_url: row.avatar_url.unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            phone: row.phone,
            address: row.address,
            bio: row.bio,
            is_visible: row.is_visible,
            created_at: row.created_at,
        }
    }
}

/// Employer card embedded in job listings.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub rating: f64,
    pub avatar_url: String,
}

/// Worker card embedded in application listings.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub rating: f64,
    pub completed_jobs: i32,
    pub location: String,
    pub skills: Vec<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile_row(avatar_url: Option<String>) -> ProfileRow {
        ProfileRow {
            id: Uuid::new_v4(),
            name: "Maria Garcia".to_string(),
            email: "maria@example.com".to_string(),
            role: Role::Worker,
            rating: 4.5,
            completed_jobs: 3,
            location: "Springfield".to_string(),
            skills: vec!["Plumbing".to_string()],
            avatar_url,
            phone: None,
            address: None,
            bio: None,
            is_visible: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_defaults_missing_avatar() {
        let profile = Profile::from(profile_row(None));
        assert_eq!(profile.avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_profile_keeps_uploaded_avatar() {
        let url = "https://cdn.example.com/me.png".to_string();
        let profile = Profile::from(profile_row(Some(url.clone())));
        assert_eq!(profile.avatar_url, url);
    }
}
