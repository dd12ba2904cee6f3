//! Fallback for paths no route matches.

use axum::{extract::State, http::Uri};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Returns `404 Not Found` listing every documented route template.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> AppError {
    debug!("No route for {}", uri.path());

    AppError::not_found(
        "Route not found",
        json!({
            "path": uri.path(),
            "available_routes": state.catalog.templates(),
        }),
    )
}
