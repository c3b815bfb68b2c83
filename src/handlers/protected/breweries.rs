use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    Extension,
};

use crate::api::{BreweryView, CreateBreweryRequest, UpdateBreweryRequest};
use crate::error::{ApiError, ApiResult};
use crate::handlers::JsonBody;
use crate::middleware::AuthContext;
use crate::services::{BreweryService, BREWERY_NOT_FOUND};
use crate::state::AppState;

/// Ids that are not integers cannot name a row.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::not_found(BREWERY_NOT_FOUND))
}

/// GET /api/breweries
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<BreweryView>>> {
    let breweries = BreweryService::new(state.store.as_ref())
        .list_visible(&auth)
        .await?;
    Ok(Json(breweries.iter().map(BreweryView::from).collect()))
}

/// GET /api/breweries/:brewery_id
pub async fn show(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(brewery_id): Path<String>,
) -> ApiResult<Json<BreweryView>> {
    let id = parse_id(&brewery_id)?;
    let brewery = BreweryService::new(state.store.as_ref())
        .find_accessible(&auth, id)
        .await?;
    Ok(Json(BreweryView::from(&brewery)))
}

/// POST /api/breweries - 201 with a `Location` header for the new row
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<CreateBreweryRequest>,
) -> ApiResult<impl IntoResponse> {
    let brewery = BreweryService::new(state.store.as_ref())
        .create(&auth, body)
        .await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), brewery.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BreweryView::from(&brewery)),
    ))
}

/// PATCH /api/breweries/:brewery_id
pub async fn update(
    State(state): State<AppState>,
    Path(brewery_id): Path<String>,
    JsonBody(body): JsonBody<UpdateBreweryRequest>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&brewery_id)?;
    BreweryService::new(state.store.as_ref()).update(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/breweries/:brewery_id
pub async fn remove(
    State(state): State<AppState>,
    Path(brewery_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&brewery_id)?;
    BreweryService::new(state.store.as_ref()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_ids_are_not_found() {
        assert_eq!(parse_id("2").unwrap(), 2);
        assert!(matches!(parse_id(":1"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound(_))));
    }
}
