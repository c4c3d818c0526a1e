pub mod auth;
pub mod response;
pub mod routes;

use auth::middleware::log_request;
use axum::{
    Router,
    http::header::CONTENT_TYPE,
    middleware::from_fn_with_state,
};
use tower_http::cors::CorsLayer;
use util::state::AppState;

/// Builds the full HTTP application: every `/api` route plus request logging
/// and CORS. `main` serves this; integration tests drive it with `oneshot`.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::routes(app_state.clone()))
        .layer(from_fn_with_state(app_state, log_request))
        .layer(cors)
}
