//! Application state container shared across Axum route handlers and guards.
//!
//! `AppState` is cheap to clone: the database connection is a pooled handle and
//! the JWT keys sit behind an `Arc`.

use crate::config::{AppConfig, MAX_JWT_DURATION_MINUTES};
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Signing material and lifetime for access tokens.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    duration_minutes: u64,
}

impl JwtKeys {
    /// `duration_minutes` is clamped to `1..=MAX_JWT_DURATION_MINUTES`.
    pub fn new(secret: &str, duration_minutes: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            duration_minutes: duration_minutes.clamp(1, MAX_JWT_DURATION_MINUTES),
        }
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }
}

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The keys used to issue and verify access tokens.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    jwt: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
        }
    }

    /// Builds state from a loaded [`AppConfig`].
    pub fn from_config(db: DatabaseConnection, cfg: &AppConfig) -> Self {
        Self::new(db, JwtKeys::new(&cfg.jwt_secret, cfg.jwt_duration_minutes))
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn jwt(&self) -> &JwtKeys {
        &self.jwt
    }
}
