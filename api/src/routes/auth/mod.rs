//! # Auth Routes
//!
//! - `POST /auth/register` → `register` (public, creates a student)
//! - `POST /auth/login` → `login` (public, issues a JWT)

use axum::{Router, routing::post};
use post::{login, register};
use util::state::AppState;

pub mod common;
pub mod post;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
