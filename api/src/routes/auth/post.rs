use crate::{
    auth::generate_jwt,
    response::{ApiError, ApiResponse},
    routes::{
        auth::common::{LoginRequest, LoginResponse, RegisterRequest},
        common::format_validation_errors,
        users::common::UserResponse,
    },
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::user_service::UserService;
use util::state::AppState;
use validator::Validate;

/// POST /api/auth/register
///
/// Self-service signup. The new account is always a `STUDENT`; teachers and
/// admins are created by an admin through `POST /api/users`.
///
/// ### Request Body
/// ```json
/// { "name": "Sam", "email": "sam@school.test", "password": "correct-horse" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new user
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if the email is taken
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    match UserService::register(app_state.db(), &req.name, &req.email, &req.password).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User registered successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /api/auth/login
///
/// Verifies credentials and issues a bearer token.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "eyJ...",
///     "expires_at": "2026-01-10T12:00:00+00:00",
///     "user": { "id": 1, "name": "Sam", "email": "sam@school.test", "role": "STUDENT", ... }
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// ### Errors
/// - `400 Bad Request` on validation failure
/// - `401 Unauthorized` on unknown email or wrong password
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    let user = match UserService::login(app_state.db(), &req.email, &req.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::info!(email = %req.email, "Failed login attempt");
            return ApiError::from(e).into_response();
        }
    };

    match generate_jwt(app_state.jwt(), user.id, user.role) {
        Ok((token, expires_at)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LoginResponse {
                    token,
                    expires_at,
                    user: user.into(),
                },
                "Login successful",
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Token encoding failed");
            ApiError::internal("Failed to issue token").into_response()
        }
    }
}
