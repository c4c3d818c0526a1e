use crate::response::{ApiError, ApiResponse};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use util::state::AppState;

/// Builds the public `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Reports whether the classroom API can reach its database. No token needed.
///
/// ### Responses
/// - `200 OK` with `data: "OK"`
/// - `503 Service Unavailable` when the database does not answer a ping
async fn health_check(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    app_state.db().ping().await.map_err(|e| {
        tracing::error!(error = %e, "health check: database unreachable");
        ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    })?;

    Ok(Json(ApiResponse::success("OK", "Classroom API is up")))
}
