//! # Users Routes Module
//!
//! Routes for the `/api/users` endpoint group. The group itself is behind
//! `allow_authenticated`; everything except `/users/me` also needs `allow_admin`.
//!
//! ## Structure
//! - `get.rs` - GET handlers (list users, get user, current user)
//! - `post.rs` - POST handlers (create user)
//! - `put.rs` - PUT handlers (update user)
//! - `delete.rs` - DELETE handlers (delete user)

use crate::auth::guards::allow_admin;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use delete::delete_user;
use get::{get_me, get_user, list_users};
use post::create_user;
use put::update_user;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/users` route group.
///
/// - `GET    /users/me`        → `get_me` (any authenticated user)
/// - `GET    /users`           → `list_users` (admin only)
/// - `POST   /users`           → `create_user` (admin only)
/// - `GET    /users/{user_id}` → `get_user` (admin only)
/// - `PUT    /users/{user_id}` → `update_user` (admin only)
/// - `DELETE /users/{user_id}` → `delete_user` (admin only)
pub fn users_routes(app_state: AppState) -> Router<AppState> {
    let admin = || from_fn_with_state(app_state.clone(), allow_admin);

    Router::new()
        .route("/me", get(get_me))
        .route(
            "/",
            get(list_users).post(create_user).route_layer(admin()),
        )
        .route(
            "/{user_id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .route_layer(admin()),
        )
}
