use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse, Empty},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::assignment_service::AssignmentService;
use util::state::AppState;

/// DELETE /api/assignments/{assignment_id}
///
/// Removes the assignment and every submission for it.
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match AssignmentService::delete(app_state.db(), user.actor(), assignment_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty::default(),
                "Assignment deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
