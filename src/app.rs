use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{protected::breweries, public};
use crate::middleware::{cors_layer, expose_error_detail, require_auth, with_security_headers};
use crate::state::AppState;

/// Full HTTP surface with the middleware chain applied.
pub fn app(state: AppState) -> Router {
    let routes = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(user_routes())
        // Protected
        .merge(brewery_routes(state.clone()));

    // Global middleware
    with_security_headers(routes)
        .layer(middleware::from_fn_with_state(state.clone(), expose_error_detail))
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(public::signup))
        .route("/api/login", post(public::login))
}

fn brewery_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/breweries", get(breweries::list).post(breweries::create))
        .route(
            "/api/breweries/:brewery_id",
            get(breweries::show)
                .patch(breweries::update)
                .delete(breweries::remove),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
