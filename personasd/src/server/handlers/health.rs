//! Index and version endpoint handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::server::app::AppState;

/// GET / - Service index
///
/// Returns the service name, version, and a map of the available endpoints.
pub async fn root(State(state): State<AppState>) -> Response {
    let index_json = json!({
        "success": true,
        "service": "personasd",
        "version": state.version,
        "endpoints": {
            "GET /personas": "List all personas",
            "GET /personas/{id}": "Get a persona by id",
            "POST /personas": "Create a new persona",
            "PUT /personas/{id}": "Update a persona",
            "DELETE /personas/{id}": "Delete a persona",
        },
    });

    (StatusCode::OK, Json(index_json)).into_response()
}

/// GET /version - Version information endpoint
pub async fn version(State(state): State<AppState>) -> Response {
    let version_json = json!({
        "success": true,
        "version": state.version,
    });

    (StatusCode::OK, Json(version_json)).into_response()
}
