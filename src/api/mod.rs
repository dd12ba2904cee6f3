//! HTTP layer: handlers, DTOs, middleware and the request/response plumbing
//! shared between them.
//!
//! # Modules
//!
//! - [`dto`] - Serializable help and health payloads
//! - [`handlers`] - Generation, health and fallback handlers
//! - [`length`] - Length resolution extractor
//! - [`middleware`] - Help short-circuit, CORS and tracing layers
//! - [`negotiate`] - JSON / plain-text content negotiation

pub mod dto;
pub mod handlers;
pub mod length;
pub mod middleware;
pub mod negotiate;

use axum::extract::Query;
use axum::http::Uri;
use std::collections::HashMap;

/// Decoded query parameters of `uri`; a bare key such as `?help` maps to `""`.
pub fn query_params(uri: &Uri) -> HashMap<String, String> {
    Query::<HashMap<String, String>>::try_from_uri(uri)
        .map(|Query(params)| params)
        .unwrap_or_default()
}
