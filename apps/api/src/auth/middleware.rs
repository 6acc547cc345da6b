use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::{bearer_token, session_user};
use crate::errors::AppError;
use crate::state::AppState;

/// Rejects requests without a live session and injects the resolved
/// `CurrentUser` into request extensions for handlers behind it.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;
    let user = session_user(&state.db, token)
        .await?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
