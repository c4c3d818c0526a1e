use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::{
        common::format_validation_errors,
        users::common::{ListUsersQuery, UserResponse, UsersListResponse},
    },
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Role;
use services::user_service::{UserFilter, UserService};
use std::str::FromStr;
use util::state::AppState;
use validator::Validate;

/// GET /api/users/me
///
/// Returns the authenticated caller's own account.
///
/// ### Responses
/// - `200 OK` with the user
/// - `401 Unauthorized` without a valid token
/// - `404 Not Found` if the account was deleted after the token was issued
pub async fn get_me(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match UserService::get(app_state.db(), user.id()).await {
        Ok(me) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(me),
                "User retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/users
///
/// Retrieve a paginated list of users with optional filtering and sorting.
/// Requires admin privileges.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 20, min: 1, max: 100)
/// - `query` (optional): Case-insensitive partial match against name OR email
/// - `role` (optional): `ADMIN`, `TEACHER` or `STUDENT`
/// - `sort` (optional): Comma-separated sort fields (`name`, `email`, `role`, `created_at`).
///   Use a `-` prefix for descending.
///
/// ### Examples
/// ```http
/// GET /api/users?page=2&per_page=10
/// GET /api/users?role=teacher&sort=-created_at
/// ```
///
/// ### Responses
/// - `200 OK` with `{ users, page, per_page, total }`
/// - `400 Bad Request` - Invalid query parameters
/// - `401 Unauthorized` - Missing or invalid JWT
/// - `403 Forbidden` - Authenticated but not admin
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Response {
    if let Err(e) = query.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    let role = match query.role.as_deref().map(Role::from_str).transpose() {
        Ok(role) => role,
        Err(_) => {
            return ApiError::bad_request("role must be one of ADMIN, TEACHER, STUDENT")
                .into_response();
        }
    };

    let filter = UserFilter {
        query: query.query,
        role,
    };

    match UserService::list(
        app_state.db(),
        filter,
        query.page,
        query.per_page,
        query.sort.as_deref(),
    )
    .await
    {
        Ok(page) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UsersListResponse {
                    users: page.users.into_iter().map(UserResponse::from).collect(),
                    page: page.page,
                    per_page: page.per_page,
                    total: page.total,
                },
                "Users retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/users/{user_id}
///
/// Fetch a single user by ID. Requires admin privileges.
///
/// ### Responses
/// - `200 OK`: User found
/// - `404 Not Found`: User does not exist
pub async fn get_user(State(app_state): State<AppState>, Path(user_id): Path<i64>) -> Response {
    match UserService::get(app_state.db(), user_id).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
