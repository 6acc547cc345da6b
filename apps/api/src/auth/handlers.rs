use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::auth::sessions::{create_session, delete_session, CurrentUser};
use crate::errors::{is_unique_violation, AppError};
use crate::models::profile::{Profile, ProfileRow};
use crate::models::user::{Role, UserRow};
use crate::profiles::handlers::fetch_profile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub user: Profile,
    pub message_key: &'static str,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
    pub user: Profile,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: Profile,
}

/// POST /api/v1/auth/signup
///
/// Creates the account and its starter profile in one transaction. No
/// session is issued; the client signs in afterwards.
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let email = normalize_email(&payload.email)?;
    validate_password(&payload.password)?;
    let password_hash = hash_password(&payload.password)?;

    let mut tx = state.db.begin().await?;

    let inserted = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (id, email, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&password_hash)
    .bind(payload.role)
    .fetch_one(&mut *tx)
    .await;

    let user = match inserted {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Conflict(
                "An account with this email already exists. Please sign in instead.".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    let profile = insert_default_profile(&mut *tx, &user).await?;
    tx.commit().await?;

    info!("Created {:?} account {}", user.role, user.id);
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user: profile.into(),
            message_key: "auth.accountCreated",
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Unknown emails and wrong passwords fail identically so the endpoint does
/// not confirm which addresses have accounts.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = payload.email.trim().to_lowercase();

    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if !verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let profile = match sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?
    {
        Some(profile) => profile,
        None => {
            warn!("Recreating missing profile for user {}", user.id);
            insert_default_profile(&state.db, &user).await?
        }
    };

    let session = create_session(&state.db, user.id, state.config.session_ttl_hours).await?;
    info!("User {} signed in", user.id);
    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: profile.into(),
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    delete_session(&state.db, user.token).await?;
    info!("User {} signed out", user.id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// Profile of whoever owns the presented token. The client calls this on
/// startup to restore a saved session.
pub async fn handle_session(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<SessionResponse>, AppError> {
    let profile = fetch_profile(&state.db, user.id).await?;
    Ok(Json(SessionResponse {
        user: profile.into(),
    }))
}

async fn insert_default_profile<'e, E>(executor: E, user: &UserRow) -> Result<ProfileRow, AppError>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    let profile = sqlx::query_as::<_, ProfileRow>(
        "INSERT INTO profiles (id, name, email, role) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(user.id)
    .bind(name_from_email(&user.email))
    .bind(&user.email)
    .bind(user.role)
    .fetch_one(executor)
    .await?;
    Ok(profile)
}

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    Ok(email)
}

/// Starter display name: the part of the email before the @.
fn name_from_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) => local.to_string(),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Maria@Example.COM ").unwrap(),
            "maria@example.com"
        );
    }

    #[test]
    fn test_normalize_email_rejects_malformed() {
        assert!(normalize_email("").is_err());
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("maria@").is_err());
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("maria@example.com"), "maria");
        assert_eq!(name_from_email("j.doe@jobs.example"), "j.doe");
    }
}
