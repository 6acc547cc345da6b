use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::session::SessionRow;
use crate::models::user::Role;

/// The authenticated caller, resolved from a bearer token and inserted into
/// request extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub token: Uuid,
}

impl CurrentUser {
    pub fn require_employer(&self) -> Result<(), AppError> {
        if self.role != Role::Employer {
            return Err(AppError::Forbidden(
                "Only employers can perform this action".to_string(),
            ));
        }
        Ok(())
    }

    pub fn require_worker(&self) -> Result<(), AppError> {
        if self.role != Role::Worker {
            return Err(AppError::Forbidden(
                "Only workers can perform this action".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(FromRow)]
struct SessionUserRow {
    user_id: Uuid,
    email: String,
    role: Role,
}

/// Issues a new session for `user_id` with the configured TTL.
pub async fn create_session(
    db: &PgPool,
    user_id: Uuid,
    ttl_hours: i64,
) -> Result<SessionRow, AppError> {
    let session = sqlx::query_as::<_, SessionRow>(
        "INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(session_expiry(ttl_hours))
    .fetch_one(db)
    .await?;
    Ok(session)
}

pub fn session_expiry(ttl_hours: i64) -> chrono::DateTime<Utc> {
    Utc::now() + Duration::hours(ttl_hours)
}

/// Resolves a token to its user. Expired or unknown tokens resolve to `None`;
/// expired rows are left for the next login to overwrite.
pub async fn session_user(db: &PgPool, token: Uuid) -> Result<Option<CurrentUser>, AppError> {
    let row = sqlx::query_as::<_, SessionUserRow>(
        "SELECT s.user_id, u.email, u.role
         FROM sessions s
         JOIN users u ON u.id = s.user_id
         WHERE s.token = $1 AND s.expires_at > NOW()",
    )
    .bind(token)
    .fetch_optional(db)
    .await?;

    Ok(row.map(|r| CurrentUser {
        id: r.user_id,
        email: r.email,
        role: r.role,
        token,
    }))
}

pub async fn delete_session(db: &PgPool, token: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(db)
        .await?;
    Ok(())
}

/// Extracts the bearer token from the Authorization header, if present and
/// shaped like a token we could have issued.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// Best-effort identification for routes that serve both anonymous and
/// signed-in callers. A missing or stale token reads as anonymous; database
/// failures still propagate.
pub async fn identify(db: &PgPool, headers: &HeaderMap) -> Result<Option<CurrentUser>, AppError> {
    match bearer_token(headers) {
        Some(token) => session_user(db, token).await,
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_parses_uuid() {
        let token = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert_eq!(bearer_token(&headers), Some(token));
    }

    #[test]
    fn test_bearer_token_rejects_garbage() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer nope"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_session_expiry_is_in_the_future() {
        let expiry = session_expiry(168);
        assert!(expiry > Utc::now() + Duration::hours(167));
        assert!(expiry <= Utc::now() + Duration::hours(168));
    }

    #[test]
    fn test_role_guards() {
        let employer = CurrentUser {
            id: Uuid::new_v4(),
            email: "boss@example.com".to_string(),
            role: Role::Employer,
            token: Uuid::new_v4(),
        };
        assert!(employer.require_employer().is_ok());
        assert!(employer.require_worker().is_err());

        let worker = CurrentUser {
            role: Role::Worker,
            ..employer
        };
        assert!(worker.require_worker().is_ok());
        assert!(worker.require_employer().is_err());
    }
}
