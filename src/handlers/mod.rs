pub mod drawings;
pub mod solver;
pub mod stoich;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// Liveness probe: constant body, no state consulted.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
