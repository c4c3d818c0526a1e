use db::models::user::{Model as UserModel, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    #[validate(email(message = "must be a valid email"))]
    pub email: String,

    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,

    pub role: Role,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: Option<String>,

    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ListUsersQuery {
    #[serde(default = "crate::routes::common::default_page")]
    #[validate(range(min = 1))]
    pub page: u64,

    #[serde(default = "crate::routes::common::default_per_page")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u64,

    /// Case-insensitive partial match on name or email.
    pub query: Option<String>,

    /// `ADMIN`, `TEACHER` or `STUDENT`, any case.
    pub role: Option<String>,

    /// Comma-separated sort fields, `-` prefix for descending.
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserModel> for UserResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
