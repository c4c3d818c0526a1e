//! # User Creation Routes
//!
//! - `POST /api/users`: Create a user with any role. Admin-only.

use crate::{
    response::{ApiError, ApiResponse},
    routes::{
        common::format_validation_errors,
        users::common::{CreateUserRequest, UserResponse},
    },
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::user_service::{CreateUser, UserService};
use util::state::AppState;
use validator::Validate;

/// POST /api/users
///
/// ### Request Body
/// ```json
/// {
///   "name": "Ms Frizzle",
///   "email": "frizzle@school.test",
///   "password": "magicbus",
///   "role": "TEACHER"
/// }
/// ```
///
/// ### Response: 201 Created
/// - JSON body with the user object (excluding password)
///
/// ### Errors:
/// - 400 Bad Request - Validation failure
/// - 409 Conflict - Duplicate email
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    match UserService::create(
        app_state.db(),
        CreateUser {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        },
    )
    .await
    {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User created successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
