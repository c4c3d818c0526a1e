//! Route guards.
//!
//! Every guard is an axum middleware function meant for
//! `from_fn_with_state(app_state, guard)`. The chain on a protected route is:
//!
//! 1. [`allow_authenticated`]: the caller must present a valid bearer token.
//!    The decoded [`AuthUser`] is stored in the request extensions so handlers
//!    can take `Extension<AuthUser>`.
//! 2. A role guard ([`allow_admin`], [`allow_teacher`], [`allow_student`]):
//!    the caller's role must be one of the listed roles.
//!
//! Role guards authenticate on their own too, so they are safe to mount on a
//! route without an explicit `allow_authenticated` in front.

use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use db::models::user::Role;
use util::state::AppState;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const TEACHER_OR_ADMIN: &[Role] = &[Role::Teacher, Role::Admin];
pub const STUDENT_ONLY: &[Role] = &[Role::Student];

/// Extracts the caller from the request and puts it back into the request
/// extensions.
async fn extract_and_insert_authuser(
    app_state: &AppState,
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, app_state)
        .await
        .map_err(|_| ApiError::unauthorized("Authentication required"))?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Whether `role` is in `allowed`. An empty list allows nobody.
pub fn role_permitted(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (req, _user) = extract_and_insert_authuser(&app_state, req).await?;
    Ok(next.run(req).await)
}

/// Base role guard the named guards build upon.
pub async fn require_role(
    app_state: &AppState,
    req: Request<Body>,
    next: Next,
    allowed: &[Role],
    failure_msg: &str,
) -> Result<Response, ApiError> {
    let (req, user) = extract_and_insert_authuser(app_state, req).await?;

    if role_permitted(user.role(), allowed) {
        Ok(next.run(req).await)
    } else {
        tracing::warn!(
            user_id = user.id(),
            role = %user.role(),
            path = %req.uri().path(),
            "Role check failed; denying access"
        );
        Err(ApiError::forbidden(failure_msg))
    }
}

/// Admin-only guard.
pub async fn allow_admin(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&app_state, req, next, ADMIN_ONLY, "Admin access required").await
}

/// Teacher guard. Admins pass as well.
pub async fn allow_teacher(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(
        &app_state,
        req,
        next,
        TEACHER_OR_ADMIN,
        "Teacher or admin access required",
    )
    .await
}

/// Student-only guard.
pub async fn allow_student(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&app_state, req, next, STUDENT_ONLY, "Student access required").await
}
