use axum::{extract::State, http::StatusCode, Json};

use crate::ai::{json_payload, prompts};
use crate::error::{AppError, AppResult};
use crate::models::ElementRequest;
use crate::AppState;

/// Bohr / Bohr-Rutherford / Lewis drawings for one element symbol.
pub async fn draw_element(
    State(state): State<AppState>,
    Json(req): Json<ElementRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if !state.ai.enabled() {
        return Err(AppError::AiDisabled);
    }
    let symbol = req.symbol.trim();
    if symbol.is_empty() {
        return Err(AppError::BadRequest(
            "Provide 'symbol' string (e.g., 'Cl').".to_string(),
        ));
    }

    let raw = state
        .ai
        .chat_json(
            &state.config.openai_model,
            &prompts::element_drawings(symbol),
            900,
        )
        .await?;
    Ok((StatusCode::OK, Json(json_payload(&raw))))
}
