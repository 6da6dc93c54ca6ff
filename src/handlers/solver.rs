use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::info;

use crate::ai::{json_payload, prompts, safety};
use crate::error::{AppError, AppResult};
use crate::models::{AdvancedRequest, AskRequest, EquationRequest, VseprRequest};
use crate::AppState;

// ── Generic Q&A ───────────────────────────────────────────────────────────────

pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if !state.ai.enabled() {
        return Err(AppError::AiDisabled);
    }
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest("Missing 'question' string.".to_string()));
    }
    if safety::likely_unsafe(question) {
        info!("blocked unsafe question");
        return Ok((
            StatusCode::OK,
            Json(json!({ "answer": prompts::REFUSAL_ANSWER })),
        ));
    }

    let answer = state
        .ai
        .chat(&state.config.openai_model, question, 700)
        .await?;
    Ok((StatusCode::OK, Json(json!({ "answer": answer }))))
}

// ── Problem Solver: Equation Builder ─────────────────────────────────────────

pub async fn solve_equation(
    State(state): State<AppState>,
    Json(req): Json<EquationRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if !state.ai.enabled() {
        return Err(AppError::AiDisabled);
    }
    let reactants = req.reactants.trim();
    if reactants.is_empty() {
        return Err(AppError::BadRequest(
            "Provide 'reactants' string (e.g., 'Zn + CuSO4').".to_string(),
        ));
    }
    if safety::likely_unsafe(reactants) {
        return Err(AppError::BadRequest("Request blocked for safety.".to_string()));
    }

    let raw = state
        .ai
        .chat_json(&state.config.openai_model, &prompts::equation(reactants), 600)
        .await?;
    Ok((StatusCode::OK, Json(json_payload(&raw))))
}

// ── Problem Solver: VSEPR / Bond Shapes & Allotropes ─────────────────────────

pub async fn solve_vsepr(
    State(state): State<AppState>,
    Json(req): Json<VseprRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if !state.ai.enabled() {
        return Err(AppError::AiDisabled);
    }
    if req.input.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Provide 'input' string (e.g., 'NH3' or 'C (graphite)').".to_string(),
        ));
    }

    let input = fix_graphite_typo(req.input.trim());

    let raw = state
        .ai
        .chat_json(&state.config.openai_model, &prompts::vsepr(&input), 700)
        .await?;
    Ok((StatusCode::OK, Json(json_payload(&raw))))
}

/// Users sometimes write "granite" but mean graphite (allotrope of carbon).
/// Matching is case-insensitive regardless of how the typo is capitalized.
fn fix_graphite_typo(input: &str) -> String {
    const TYPO: &[u8] = b"granite";
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes.len() - i >= TYPO.len() && bytes[i..i + TYPO.len()].eq_ignore_ascii_case(TYPO) {
            out.push_str("graphite");
            i += TYPO.len();
        } else {
            // TYPO is pure ASCII, so an unmatched position advances one char.
            let step = input[i..].chars().next().map_or(1, |c| c.len_utf8());
            out.push_str(&input[i..i + step]);
            i += step;
        }
    }
    out
}

// ── Advanced solver (university-level) ───────────────────────────────────────

pub async fn solve_advanced(
    State(state): State<AppState>,
    Json(req): Json<AdvancedRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if !state.ai.enabled() {
        return Err(AppError::AiDisabled);
    }
    let topic = req.topic.trim();
    let prompt = req.prompt.trim();
    if topic.is_empty() || prompt.is_empty() {
        return Err(AppError::BadRequest("Provide 'topic' and 'prompt'.".to_string()));
    }

    // Deeper-reasoning model for university-level problems.
    let raw = state
        .ai
        .chat_json(
            &state.config.openai_model_advanced,
            &prompts::advanced(topic, prompt),
            1000,
        )
        .await?;
    Ok((StatusCode::OK, Json(json_payload(&raw))))
}
