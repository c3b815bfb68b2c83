use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::Credentials;
use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;

/// Caller identity established by [`require_auth`], valid for one request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Set for per-user credentials; `None` for the static service token.
    pub user_id: Option<i64>,
}

impl AuthContext {
    pub fn service() -> Self {
        Self { user_id: None }
    }

    pub fn user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

/// Reject requests without valid credentials and attach an [`AuthContext`]
/// to the ones that pass.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string());

    let context = match authenticate(&state, header.as_deref()).await {
        Ok(context) => context,
        Err(ApiError::Unauthorized(reason)) => {
            tracing::error!("Unauthorized request to path: {}", request.uri().path());
            tracing::debug!("Rejected credentials: {}", reason);
            return Err(ApiError::Unauthorized(reason));
        }
        Err(other) => return Err(other),
    };

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Resolve an `Authorization` header value to a caller identity.
pub async fn authenticate(state: &AppState, header: Option<&str>) -> Result<AuthContext, ApiError> {
    let header = header.ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;
    let credentials = Credentials::parse(header).map_err(|e| ApiError::unauthorized(e.to_string()))?;

    match credentials {
        Credentials::Bearer(token) => {
            let api_token = &state.config.security.api_token;
            if !api_token.is_empty() && token == *api_token {
                return Ok(AuthContext::service());
            }

            let claims = state
                .tokens
                .verify(&token)
                .map_err(|e| ApiError::unauthorized(e.to_string()))?;
            Ok(AuthContext::user(claims.id))
        }
        Credentials::Basic { email, password } => {
            let user = UserService::new(state.store.as_ref())
                .validate_credentials(&email, &password)
                .await?
                .ok_or_else(|| ApiError::unauthorized("basic credentials did not match a user"))?;
            Ok(AuthContext::user(user.id))
        }
    }
}
