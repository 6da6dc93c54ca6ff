use axum::{http::StatusCode, Json};
use tracing::debug;

use crate::models::{StoichRequest, StoichResponse};

/// TEMP: returns `value * 2` just to prove the frontend can reach the service
/// and get typed JSON back. Replaced once the real stoichiometry engine lands.
///
/// Malformed bodies never reach this function; the `Json` extractor rejects
/// them with a 4xx before the handler runs.
pub async fn stoich_example(
    Json(req): Json<StoichRequest>,
) -> (StatusCode, Json<StoichResponse>) {
    let result = req.value * 2.0;
    debug!(value = req.value, result, "stoich stub evaluated");
    (StatusCode::OK, Json(StoichResponse { result }))
}
