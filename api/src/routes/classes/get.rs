use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::{
        assignments::common::AssignmentResponse, classes::common::ClassResponse,
        users::common::UserResponse,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::class_service::ClassService;
use util::state::AppState;

/// GET /api/classes
///
/// Lists the classes visible to the caller:
/// - admins see every class
/// - teachers see the classes they teach
/// - students see the classes they are enrolled in
pub async fn list_classes(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match ClassService::list_for(app_state.db(), user.actor()).await {
        Ok(classes) => {
            let data: Vec<ClassResponse> = classes.into_iter().map(ClassResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Classes retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/classes/{class_id}
///
/// ### Responses
/// - `200 OK` with the class
/// - `403 Forbidden` if the caller neither teaches nor attends the class
/// - `404 Not Found` if the class does not exist
pub async fn get_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match ClassService::get(app_state.db(), user.actor(), class_id).await {
        Ok(class) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ClassResponse::from(class),
                "Class retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/classes/{class_id}/students
///
/// Roster of enrolled students, ordered by name. Owner or admin only.
pub async fn list_students(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match ClassService::students(app_state.db(), user.actor(), class_id).await {
        Ok(students) => {
            let data: Vec<UserResponse> = students.into_iter().map(UserResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Students retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/classes/{class_id}/assignments
///
/// Assignments of a class, earliest due date first. Any class member may read them.
pub async fn list_class_assignments(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match ClassService::assignments(app_state.db(), user.actor(), class_id).await {
        Ok(assignments) => {
            let data: Vec<AssignmentResponse> = assignments
                .into_iter()
                .map(AssignmentResponse::from)
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Assignments retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
