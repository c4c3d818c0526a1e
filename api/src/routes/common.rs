//! Helpers shared by route handlers.

use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

/// Flattens `validator` errors into one readable line, e.g.
/// `email: must be a valid email; password: must be at least 8 characters`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let msgs: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, msgs.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Deserializes a present field (even `null`) as `Some(..)`.
///
/// Combined with `#[serde(default)]` this separates "field absent" (`None`)
/// from "field set to null" (`Some(None)`) on partial updates.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Default page for list endpoints.
pub fn default_page() -> u64 {
    1
}

/// Default page size for list endpoints.
pub fn default_per_page() -> u64 {
    20
}
