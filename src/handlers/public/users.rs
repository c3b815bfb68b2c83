use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::{CredentialsRequest, SessionResponse, UserView};
use crate::database::User;
use crate::error::{ApiError, ApiResult};
use crate::handlers::JsonBody;
use crate::services::{UserService, CREDENTIALS_MISMATCH};
use crate::state::AppState;

/// POST /api/signup - 201 with a session token, or the new user when
/// session tokens are disabled
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> ApiResult<Response> {
    let (email, password) = body.require()?;
    let user = UserService::new(state.store.as_ref())
        .register(email, password)
        .await?;

    tracing::info!("User with id {} signed up.", user.id);
    session_response(&state, &user, StatusCode::CREATED)
}

/// POST /api/login - 200 with the same shape as signup, 404 on mismatch
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CredentialsRequest>,
) -> ApiResult<Response> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::not_found(CREDENTIALS_MISMATCH));
    };

    let user = UserService::new(state.store.as_ref())
        .validate_credentials(&email, &password)
        .await?
        .ok_or_else(|| ApiError::not_found(CREDENTIALS_MISMATCH))?;

    session_response(&state, &user, StatusCode::OK)
}

fn session_response(state: &AppState, user: &User, status: StatusCode) -> ApiResult<Response> {
    if state.config.security.session_tokens {
        let token = state.tokens.issue(user.id)?;
        return Ok((status, Json(SessionResponse { token })).into_response());
    }
    Ok((status, Json(UserView::from(user))).into_response())
}
