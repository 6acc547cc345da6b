use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::auth::sessions::CurrentUser;
use crate::errors::AppError;
use crate::jobs::validation::normalize_skills;
use crate::models::application::ApplicationStatus;
use crate::models::profile::{Profile, ProfileRow, DEFAULT_AVATAR_URL};
use crate::models::user::Role;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct VisibilityRequest {
    pub is_visible: bool,
}

#[derive(Serialize)]
pub struct ProfileUpdatedResponse {
    pub profile: Profile,
    pub message_key: &'static str,
}

/// A worker the employer has previously accepted, with how many of the
/// employer's jobs they were accepted on.
#[derive(Serialize)]
pub struct PastWorker {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub rating: f64,
    pub completed_jobs: i32,
    pub location: String,
    pub skills: Vec<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub job_count: i64,
}

#[derive(FromRow)]
struct PastWorkerRow {
    id: Uuid,
    name: String,
    email: String,
    rating: f64,
    completed_jobs: i32,
    location: String,
    skills: Vec<String>,
    avatar_url: Option<String>,
    bio: Option<String>,
    job_count: i64,
}

impl From<PastWorkerRow> for PastWorker {
    fn from(row: PastWorkerRow) -> Self {
        PastWorker {
            id: row.id,
            name: row.name,
            email: row.email,
            rating: row.rating,
            completed_jobs: row.completed_jobs,
            location: row.location,
            skills: row.skills,
            avatar_url: row
                .avatar_url
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            bio: row.bio,
            job_count: row.job_count,
        }
    }
}

/// GET /api/v1/profiles/me
pub async fn handle_get_me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Profile>, AppError> {
    let profile = fetch_profile(&state.db, user.id).await?;
    Ok(Json(profile.into()))
}

/// PATCH /api/v1/profiles/me
///
/// Full replacement of the caller-editable fields. Blank optional fields
/// are stored as NULL; rating and completed_jobs stay trigger-owned.
pub async fn handle_update_me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileUpdatedResponse>, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let profile = sqlx::query_as::<_, ProfileRow>(
        "UPDATE profiles SET name = $2, location = $3, skills = $4, phone = $5, \
                             address = $6, bio = $7, avatar_url = $8, updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(user.id)
    .bind(&name)
    .bind(payload.location.trim())
    .bind(normalize_skills(&payload.skills))
    .bind(clean_optional(payload.phone))
    .bind(clean_optional(payload.address))
    .bind(clean_optional(payload.bio))
    .bind(clean_optional(payload.avatar_url))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(ProfileUpdatedResponse {
        profile: profile.into(),
        message_key: "profile.updated",
    }))
}

/// PATCH /api/v1/profiles/me/visibility
///
/// Workers opt in or out of the community directory.
pub async fn handle_set_visibility(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<VisibilityRequest>,
) -> Result<Json<ProfileUpdatedResponse>, AppError> {
    user.require_worker()?;

    let profile = sqlx::query_as::<_, ProfileRow>(
        "UPDATE profiles SET is_visible = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(user.id)
    .bind(payload.is_visible)
    .fetch_one(&state.db)
    .await?;

    let message_key = if payload.is_visible {
        "profile.visible"
    } else {
        "profile.hidden"
    };
    Ok(Json(ProfileUpdatedResponse {
        profile: profile.into(),
        message_key,
    }))
}

/// GET /api/v1/community
///
/// Workers who opted into the directory, alphabetical, the caller excluded.
pub async fn handle_community(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Profile>>, AppError> {
    let rows = sqlx::query_as::<_, ProfileRow>(
        "SELECT * FROM profiles \
         WHERE role = $1 AND is_visible = TRUE AND id != $2 \
         ORDER BY name",
    )
    .bind(Role::Worker)
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows.into_iter().map(Profile::from).collect()))
}

/// GET /api/v1/workers/past
///
/// Workers the calling employer has accepted before, with how many of the
/// employer's jobs each was accepted on.
pub async fn handle_past_workers(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<PastWorker>>, AppError> {
    user.require_employer()?;

    let rows = sqlx::query_as::<_, PastWorkerRow>(
        "SELECT w.id, w.name, w.email, w.rating, w.completed_jobs, w.location, \
                w.skills, w.avatar_url, w.bio, COUNT(a.id) AS job_count \
         FROM applications a \
         JOIN jobs j ON j.id = a.job_id \
         JOIN profiles w ON w.id = a.worker_id \
         WHERE j.employer_id = $1 AND a.status = $2 \
         GROUP BY w.id \
         ORDER BY w.name",
    )
    .bind(user.id)
    .bind(ApplicationStatus::Accepted)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows.into_iter().map(PastWorker::from).collect()))
}

pub(crate) async fn fetch_profile(db: &sqlx::PgPool, user_id: Uuid) -> Result<ProfileRow, AppError> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_blanks_to_none() {
        assert_eq!(clean_optional(None), None);
        assert_eq!(clean_optional(Some("".to_string())), None);
        assert_eq!(clean_optional(Some("   ".to_string())), None);
        assert_eq!(
            clean_optional(Some("  +1 555 0100 ".to_string())),
            Some("+1 555 0100".to_string())
        );
    }
}
