//! # Classes Routes Module
//!
//! Routes for `/api/classes`. Reads are open to any authenticated user (the
//! service layer checks membership); writes need `allow_teacher`, which also
//! admits admins.

use crate::auth::guards::allow_teacher;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use delete::{delete_class, unenroll_student};
use get::{get_class, list_class_assignments, list_classes, list_students};
use post::{create_class, enroll_student};
use put::update_class;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/classes` route group.
///
/// - `GET    /classes`                                → `list_classes`
/// - `POST   /classes`                                → `create_class` (teacher)
/// - `GET    /classes/{class_id}`                     → `get_class`
/// - `PUT    /classes/{class_id}`                     → `update_class` (teacher)
/// - `DELETE /classes/{class_id}`                     → `delete_class` (teacher)
/// - `GET    /classes/{class_id}/students`            → `list_students` (teacher)
/// - `POST   /classes/{class_id}/students`            → `enroll_student` (teacher)
/// - `DELETE /classes/{class_id}/students/{student_id}` → `unenroll_student` (teacher)
/// - `GET    /classes/{class_id}/assignments`         → `list_class_assignments`
pub fn class_routes(app_state: AppState) -> Router<AppState> {
    let teacher = || from_fn_with_state(app_state.clone(), allow_teacher);

    Router::new()
        .route("/", get(list_classes))
        .route("/", post(create_class).route_layer(teacher()))
        .route("/{class_id}", get(get_class))
        .route(
            "/{class_id}",
            put(update_class)
                .delete(delete_class)
                .route_layer(teacher()),
        )
        .route(
            "/{class_id}/students",
            get(list_students)
                .post(enroll_student)
                .route_layer(teacher()),
        )
        .route(
            "/{class_id}/students/{student_id}",
            delete(unenroll_student).route_layer(teacher()),
        )
        .route("/{class_id}/assignments", get(list_class_assignments))
}
