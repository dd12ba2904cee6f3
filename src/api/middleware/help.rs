//! Help short-circuit middleware.
//!
//! Any request carrying a `help` query parameter, with or without a value,
//! is answered with documentation from the route catalog instead of reaching
//! a handler. The layer runs before routing, so unknown paths get the
//! "Route not found" payload rather than the generic 404 body.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use tracing::{debug, error};

use crate::api::dto::help::{HelpResponse, QueryParameters, SERVICE_NAME, USAGE};
use crate::api::negotiate::Accept;
use crate::api::query_params;
use crate::catalog::RouteCatalog;
use crate::state::AppState;

/// Query key that triggers the help payload.
pub const HELP_FLAG: &str = "help";

/// Returns `true` iff the help flag is present, whatever its value.
pub fn is_help_requested(query: &HashMap<String, String>) -> bool {
    query.contains_key(HELP_FLAG)
}

/// Builds the help payload for `path`.
///
/// - root (`""` or `/`): the whole catalog
/// - a path matching a route template: that route plus query parameter docs
/// - anything else: a "Route not found" payload listing every template
pub fn respond<'a>(catalog: &'a RouteCatalog, path: &str, default_length: u32) -> HelpResponse<'a> {
    if path.is_empty() || path == "/" {
        return HelpResponse::Catalog {
            service: SERVICE_NAME,
            usage: USAGE,
            routes: catalog.routes(),
        };
    }

    match catalog.find_match(path) {
        Some(route) => HelpResponse::Route {
            route,
            query_parameters: QueryParameters::new(default_length),
        },
        None => HelpResponse::NotFound {
            error: "Route not found",
            available_routes: catalog.templates(),
        },
    }
}

/// Answers `?help` requests from the catalog; passes everything else on.
///
/// # Response Codes
///
/// - **200 OK**: catalog or route help
/// - **404 Not Found**: no route matches the path
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/alpha", get(handler))
///     .layer(middleware::from_fn_with_state(state.clone(), help::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !is_help_requested(&query_params(req.uri())) {
        return next.run(req).await;
    }

    let path = req.uri().path();
    let help = respond(&state.catalog, path, state.config.default_length);
    let status = if help.is_not_found() {
        debug!("Help requested for unknown path {}", path);
        StatusCode::NOT_FOUND
    } else {
        debug!("Help requested for {}", path);
        StatusCode::OK
    };

    match serde_json::to_value(&help) {
        Ok(value) => {
            let accept = Accept::from_headers(req.headers());
            (status, accept.respond(value)).into_response()
        }
        Err(e) => {
            error!("Failed to serialize help for {}: {}", path, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn catalog() -> RouteCatalog {
        RouteCatalog::builtin(10).unwrap()
    }

    fn to_json(help: &HelpResponse<'_>) -> Value {
        serde_json::to_value(help).unwrap()
    }

    #[test]
    fn test_help_flag_presence() {
        let mut query = HashMap::new();
        assert!(!is_help_requested(&query));

        query.insert("length".to_string(), "8".to_string());
        assert!(!is_help_requested(&query));

        query.insert("help".to_string(), String::new());
        assert!(is_help_requested(&query));

        query.insert("help".to_string(), "false".to_string());
        assert!(is_help_requested(&query));
    }

    #[test]
    fn test_root_returns_full_catalog() {
        let catalog = catalog();
        for path in ["", "/"] {
            let json = to_json(&respond(&catalog, path, 10));
            assert_eq!(json["service"], SERVICE_NAME);
            assert_eq!(json["usage"], USAGE);
            assert_eq!(json["routes"].as_array().unwrap().len(), catalog.len());
        }
    }

    #[test]
    fn test_matched_route() {
        let catalog = catalog();
        let json = to_json(&respond(&catalog, "/alpha", 10));
        assert_eq!(json["path"], "/alpha/{length?}");
        assert!(json["description"].is_string());
        assert!(json["parameters"].get("length").is_some());
        assert!(json.get("route").is_none());
        assert_eq!(json["queryParameters"]["help"], "Show this help message");
        assert_eq!(
            json["queryParameters"]["length"],
            "Length of hash (default: 10)"
        );
    }

    #[test]
    fn test_numeric_root_path_matches_root_route() {
        let catalog = catalog();
        let json = to_json(&respond(&catalog, "/15", 10));
        assert_eq!(json["path"], "/{length?}");
    }

    #[test]
    fn test_unknown_route() {
        let catalog = catalog();
        let help = respond(&catalog, "/nope/1", 10);
        assert!(help.is_not_found());

        let json = to_json(&help);
        assert_eq!(json["error"], "Route not found");
        assert_eq!(
            json["availableRoutes"].as_array().unwrap().len(),
            catalog.len()
        );
        assert_eq!(json["availableRoutes"][0], "/{length?}");
    }
}
