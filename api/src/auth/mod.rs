pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use db::models::user::Role;
use jsonwebtoken::{Header, encode, errors::ErrorKind};
use util::state::JwtKeys;

/// Generates a JWT and its expiry timestamp (RFC 3339) for a given user.
pub fn generate_jwt(
    keys: &JwtKeys,
    user_id: i64,
    role: Role,
) -> Result<(String, String), jsonwebtoken::errors::Error> {
    let expiry = i64::try_from(keys.duration_minutes())
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or(ErrorKind::InvalidToken)?;
    let exp = usize::try_from(expiry.timestamp()).map_err(|_| ErrorKind::InvalidToken)?;

    let claims = Claims {
        sub: user_id,
        role,
        exp,
    };

    let token = encode(&Header::default(), &claims, keys.encoding_key())?;

    Ok((token, expiry.to_rfc3339()))
}
