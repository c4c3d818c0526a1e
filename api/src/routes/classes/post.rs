use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::{
        classes::common::{ClassResponse, CreateClassRequest, EnrollRequest, EnrollmentResponse},
        common::format_validation_errors,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::class_service::{ClassService, CreateClass};
use util::state::AppState;
use validator::Validate;

/// POST /api/classes
///
/// Creates a class owned by the caller. Admins must pass `teacher_id` to create
/// it on a teacher's behalf.
///
/// ### Request Body
/// ```json
/// { "name": "Biology 101", "description": "Cells and such" }
/// ```
///
/// ### Responses
/// - `201 Created` with the class
/// - `400 Bad Request` on validation failure, or when an admin omits `teacher_id`
///   or names someone who is not a teacher
/// - `403 Forbidden` for students
pub async fn create_class(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateClassRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    let params = CreateClass {
        name: req.name,
        description: req.description,
        teacher_id: req.teacher_id,
    };

    match ClassService::create(app_state.db(), user.actor(), params).await {
        Ok(class) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ClassResponse::from(class),
                "Class created successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /api/classes/{class_id}/students
///
/// Enrolls a student in the class.
///
/// ### Request Body
/// ```json
/// { "student_id": 42 }
/// ```
///
/// ### Responses
/// - `201 Created` with the enrollment
/// - `400 Bad Request` if the user is not a student
/// - `404 Not Found` if the class or student does not exist
/// - `409 Conflict` if already enrolled
pub async fn enroll_student(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<EnrollRequest>,
) -> Response {
    match ClassService::enroll(app_state.db(), user.actor(), class_id, req.student_id).await {
        Ok(enrollment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                EnrollmentResponse::from(enrollment),
                "Student enrolled successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
