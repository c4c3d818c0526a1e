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
use services::user_service::UserService;
use util::state::AppState;

/// DELETE /api/users/{user_id}
///
/// Delete a user by their ID. Admin-only. Users cannot delete their own account.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": {}, "message": "User deleted successfully" }
/// ```
/// - `403 Forbidden` when deleting yourself
/// - `404 Not Found` when the user does not exist
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match UserService::delete(app_state.db(), user.actor(), user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "User deleted successfully")),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
