//! # Assignments Routes Module
//!
//! Routes for `/api/assignments`, including student submissions and grading.
//!
//! Guards:
//! - `allow_teacher` on authoring, listing submissions and grading
//! - `allow_student` on submitting and reading one's own submission
//! - reading an assignment only needs authentication plus class membership

use crate::auth::guards::{allow_student, allow_teacher};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use delete::delete_assignment;
use get::{get_assignment, get_my_submission, list_submissions};
use post::{create_assignment, submit_assignment};
use put::{grade_submission, update_assignment};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/assignments` route group.
///
/// - `POST   /assignments`                                                   → `create_assignment` (teacher)
/// - `GET    /assignments/{assignment_id}`                                   → `get_assignment`
/// - `PUT    /assignments/{assignment_id}`                                   → `update_assignment` (teacher)
/// - `DELETE /assignments/{assignment_id}`                                   → `delete_assignment` (teacher)
/// - `POST   /assignments/{assignment_id}/submissions`                       → `submit_assignment` (student)
/// - `GET    /assignments/{assignment_id}/submissions`                       → `list_submissions` (teacher)
/// - `GET    /assignments/{assignment_id}/submissions/me`                    → `get_my_submission` (student)
/// - `PUT    /assignments/{assignment_id}/submissions/{submission_id}/grade` → `grade_submission` (teacher)
pub fn assignment_routes(app_state: AppState) -> Router<AppState> {
    let teacher = || from_fn_with_state(app_state.clone(), allow_teacher);
    let student = || from_fn_with_state(app_state.clone(), allow_student);

    Router::new()
        .route("/", post(create_assignment).route_layer(teacher()))
        .route("/{assignment_id}", get(get_assignment))
        .route(
            "/{assignment_id}",
            put(update_assignment)
                .delete(delete_assignment)
                .route_layer(teacher()),
        )
        .route(
            "/{assignment_id}/submissions",
            post(submit_assignment).route_layer(student()),
        )
        .route(
            "/{assignment_id}/submissions",
            get(list_submissions).route_layer(teacher()),
        )
        .route(
            "/{assignment_id}/submissions/me",
            get(get_my_submission).route_layer(student()),
        )
        .route(
            "/{assignment_id}/submissions/{submission_id}/grade",
            put(grade_submission).route_layer(teacher()),
        )
}
