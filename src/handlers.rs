use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::prompt::{self, ReasoningMode, TargetLanguage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReasoningRequest {
    pub prompt: String,
    pub mode: ReasoningMode,
}

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub prompt: String,
    pub language: TargetLanguage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// Reasoning form handler: append the /think or /no_think suffix and run the
/// payload through the model.
pub async fn reasoning(
    State(state): State<AppState>,
    Json(request): Json<ReasoningRequest>,
) -> Json<GenerateResponse> {
    let payload = prompt::with_reasoning_mode(&request.prompt, request.mode);
    Json(generate(&state, &payload).await)
}

/// Translation form handler: wrap the prompt for non-English targets, pass
/// English through unchanged, and run the payload through the model.
pub async fn translation(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Json<GenerateResponse> {
    let payload = prompt::for_translation(&request.prompt, request.language);
    Json(generate(&state, &payload).await)
}

/// One blocking model-runner invocation per call. Runner faults are reported
/// as response text, never as an HTTP error: the form always gets a string.
async fn generate(state: &AppState, payload: &str) -> GenerateResponse {
    debug!("Composed payload: {:?}", payload);
    match state.runner.generate(payload).await {
        Ok(text) => GenerateResponse { text },
        Err(e) => {
            warn!("Model runner invocation failed: {}", e);
            GenerateResponse {
                text: e.user_message(),
            }
        }
    }
}
