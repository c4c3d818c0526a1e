//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Registration and login (public)
//! - `/users` → User management (admin-only, except `/users/me`)
//! - `/classes` → Classes, rosters and class assignments (authenticated; writes need a teacher)
//! - `/assignments` → Assignments, submissions and grading (authenticated; per-route roles)

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    assignments::assignment_routes, auth::auth_routes, classes::class_routes,
    health::health_routes, users::users_routes,
};
use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

pub mod assignments;
pub mod auth;
pub mod classes;
pub mod common;
pub mod health;
pub mod users;

/// Builds the router for every endpoint under `/api`.
///
/// Authentication is applied to a whole group with `route_layer`, so unknown
/// paths still answer `404` rather than `401`. Role guards are attached per
/// route inside each group.
pub fn routes(app_state: AppState) -> Router {
    let authenticated = || from_fn_with_state(app_state.clone(), allow_authenticated);

    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/users",
            users_routes(app_state.clone()).route_layer(authenticated()),
        )
        .nest(
            "/classes",
            class_routes(app_state.clone()).route_layer(authenticated()),
        )
        .nest(
            "/assignments",
            assignment_routes(app_state.clone()).route_layer(authenticated()),
        )
        .with_state(app_state.clone())
}
