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
use services::class_service::ClassService;
use util::state::AppState;

/// DELETE /api/classes/{class_id}
///
/// Deletes the class along with its enrollments, assignments and submissions.
pub async fn delete_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match ClassService::delete(app_state.db(), user.actor(), class_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Class deleted successfully")),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// DELETE /api/classes/{class_id}/students/{student_id}
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the class does not exist or the student is not enrolled
pub async fn unenroll_student(
    State(app_state): State<AppState>,
    Path((class_id, student_id)): Path<(i64, i64)>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match ClassService::unenroll(app_state.db(), user.actor(), class_id, student_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty::default(),
                "Student unenrolled successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
