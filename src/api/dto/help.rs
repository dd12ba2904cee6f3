//! DTOs for `?help` responses.

use serde::Serialize;

use crate::catalog::RouteDescriptor;

pub const SERVICE_NAME: &str = "itty.id - Random Hash Generation API";
pub const USAGE: &str = "Add ?help to any endpoint for specific help";

/// Documentation for the query parameters every route accepts.
#[derive(Debug, Clone, Serialize)]
pub struct QueryParameters {
    pub help: String,
    pub length: String,
}

impl QueryParameters {
    pub fn new(default_length: u32) -> Self {
        Self {
            help: "Show this help message".to_string(),
            length: format!("Length of hash (default: {default_length})"),
        }
    }
}

/// Payload returned instead of a generated identifier when `?help` is set.
///
/// ```json
/// { "service": "...", "usage": "...", "routes": [ ... ] }
/// { "path": "/alpha/{length?}", "description": "...", ..., "queryParameters": { ... } }
/// { "error": "Route not found", "availableRoutes": [ "/{length?}", ... ] }
/// ```
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HelpResponse<'a> {
    Catalog {
        service: &'static str,
        usage: &'static str,
        routes: &'a [RouteDescriptor],
    },
    Route {
        #[serde(flatten)]
        route: &'a RouteDescriptor,
        #[serde(rename = "queryParameters")]
        query_parameters: QueryParameters,
    },
    NotFound {
        error: &'static str,
        #[serde(rename = "availableRoutes")]
        available_routes: Vec<&'a str>,
    },
}

impl HelpResponse<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HelpResponse::NotFound { .. })
    }
}
