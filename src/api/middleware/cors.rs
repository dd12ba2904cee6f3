//! CORS middleware.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer for the public generation API.
///
/// - **Origins**: any
/// - **Methods**: `GET`, `OPTIONS`
/// - **Headers**: any
///
/// Preflight `OPTIONS` requests are answered by the layer itself and never
/// reach the router.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
