//! Top-level router built from the route catalog.
//!
//! # Route Structure
//!
//! - `GET /{length?}`, `/alpha/{length?}`, ...  - Random hashes per character set
//! - `GET /from/{characters}/{length?}`         - Hash from a custom character set
//! - `GET /uuid`, `/uuid/{version}`             - UUID v4 / v6 / v7
//! - `GET /uuid/v5/{value}/{namespace?}`        - Name-based UUID v5
//! - `GET /nanoid`                              - Nanoid
//! - `GET /typeid/{prefix?}`                    - Typeid
//! - `GET /health`                              - Health check
//!
//! Every catalog template is registered with each of its
//! [`PathTemplate::router_paths`](crate::catalog::PathTemplate::router_paths),
//! so the documented routes and the served routes cannot drift apart.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive headers and preflight handling (configurable)
//! - **Help** - `?help` short-circuit answered from the catalog

use axum::routing::{MethodRouter, get};
use axum::{Router, middleware};

use crate::api::handlers::{
    from_handler, hash_handler, health_handler, nanoid_handler, not_found_handler, typeid_handler,
    uuid_handler, uuid_v5_handler, uuid_version_handler,
};
use crate::api::length::ResolvedLength;
use crate::api::middleware::{cors, help, tracing};
use crate::api::negotiate::Accept;
use crate::generator::Endpoint;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(health_handler));

    for route in state.catalog.routes() {
        for path in route.path.router_paths() {
            router = router.route(&path, endpoint_handler(route.endpoint));
        }
    }

    let router = router
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(state.clone(), help::layer));

    let router = if state.config.cors_enabled {
        router.layer(cors::layer())
    } else {
        router
    };

    router.layer(tracing::layer()).with_state(state)
}

fn endpoint_handler(endpoint: Endpoint) -> MethodRouter<AppState> {
    match endpoint {
        Endpoint::Hash(charset) => get(move |length: ResolvedLength, accept: Accept| {
            hash_handler(charset, length, accept)
        }),
        Endpoint::FromCharacters => get(from_handler),
        Endpoint::Uuid => get(uuid_handler),
        Endpoint::UuidVersion => get(uuid_version_handler),
        Endpoint::UuidV5 => get(uuid_v5_handler),
        Endpoint::Nanoid => get(nanoid_handler),
        Endpoint::TypeId => get(typeid_handler),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn status(app: &Router, path: &str) -> StatusCode {
        app.clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_every_catalog_sample_path_is_served() {
        let state = AppState::from_config(Config::default()).unwrap();
        let samples: Vec<String> = state
            .catalog
            .routes()
            .iter()
            .map(|r| r.path.sample_path())
            .collect();
        let app = app_router(state);

        for sample in samples {
            assert_eq!(status(&app, &sample).await, StatusCode::OK, "{sample}");
        }
    }

    #[tokio::test]
    async fn test_optional_segments_can_be_omitted() {
        let app = app_router(AppState::from_config(Config::default()).unwrap());

        for path in ["/", "/alpha", "/from/ABC", "/uuid/v5/example.com", "/typeid"] {
            assert_eq!(status(&app, path).await, StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_unregistered_method() {
        let app = app_router(AppState::from_config(Config::default()).unwrap());

        let response = app
            .oneshot(Request::post("/alpha").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
