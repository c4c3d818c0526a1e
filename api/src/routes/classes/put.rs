use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::{
        classes::common::{ClassResponse, UpdateClassRequest},
        common::format_validation_errors,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::class_service::{ClassService, UpdateClass};
use util::state::AppState;
use validator::Validate;

/// PUT /api/classes/{class_id}
///
/// Partial update. Send `"description": null` to clear the description.
/// Changing `teacher_id` is reserved for admins.
///
/// ### Responses
/// - `200 OK` with the updated class
/// - `400 Bad Request` on validation failure
/// - `403 Forbidden` if the caller does not own the class
/// - `404 Not Found` if the class does not exist
pub async fn update_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<UpdateClassRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    let params = UpdateClass {
        name: req.name,
        description: req.description,
        teacher_id: req.teacher_id,
    };

    match ClassService::update(app_state.db(), user.actor(), class_id, params).await {
        Ok(class) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ClassResponse::from(class),
                "Class updated successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
