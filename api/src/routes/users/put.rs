use crate::{
    response::{ApiError, ApiResponse},
    routes::{
        common::format_validation_errors,
        users::common::{UpdateUserRequest, UserResponse},
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::user_service::{UpdateUser, UserService};
use util::state::AppState;
use validator::Validate;

/// PUT /api/users/{user_id}
///
/// Partially updates a user. Omitted fields are left unchanged. Admin-only.
///
/// ### Request Body
/// ```json
/// { "name": "New Name", "role": "TEACHER" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request` on validation failure
/// - `404 Not Found` if the user does not exist
/// - `409 Conflict` if the new email belongs to someone else
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    match UserService::update(
        app_state.db(),
        user_id,
        UpdateUser {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        },
    )
    .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User updated successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
