//! Length resolution for hash routes.
//!
//! The effective length comes from the `{length}` path segment, else the
//! `length` query parameter, else the configured default. The winning raw
//! value is coerced permissively: anything that is not a finite number of at
//! least 1 falls back to the default instead of producing an error.

use axum::{
    extract::{FromRef, FromRequestParts, RawPathParams},
    http::request::Parts,
};
use std::convert::Infallible;

use crate::api::query_params;
use crate::state::AppState;

/// Resolves the effective length.
///
/// `path_param` takes precedence over `query_param` even when it fails to
/// parse; coercion only ever falls back to `default`.
///
/// ```ignore
/// assert_eq!(resolve(None, Some("12"), 8), 12);
/// assert_eq!(resolve(Some("5"), Some("99"), 8), 5);
/// assert_eq!(resolve(Some("abc"), None, 8), 8);
/// ```
pub fn resolve(path_param: Option<&str>, query_param: Option<&str>, default: u32) -> u32 {
    path_param
        .or(query_param)
        .and_then(coerce)
        .unwrap_or(default)
}

fn coerce(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<f64>().ok()?.trunc();
    if !value.is_finite() || value < 1.0 {
        return None;
    }
    // saturating float-to-int cast
    Some(value as u32)
}

/// Length resolved for the current request, clamped to `MAX_LENGTH`.
///
/// The first extraction stores the value in the request extensions; later
/// extractions in the same request read it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLength(pub u32);

impl ResolvedLength {
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl<S> FromRequestParts<S> for ResolvedLength
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(resolved) = parts.extensions.get::<ResolvedLength>() {
            return Ok(*resolved);
        }

        let config = AppState::from_ref(state).config;

        let path_param = RawPathParams::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|params| {
                params
                    .iter()
                    .find(|(key, _)| *key == "length")
                    .map(|(_, value)| value.to_owned())
            });
        let query = query_params(&parts.uri);
        let query_param = query.get("length").map(String::as_str);

        let length = resolve(path_param.as_deref(), query_param, config.default_length)
            .min(config.max_length);

        tracing::trace!(length, "resolved length");

        let resolved = ResolvedLength(length);
        parts.extensions.insert(resolved);
        Ok(resolved)
    }
}
