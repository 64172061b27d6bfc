use crate::{
    dtos::{GenerateRequest, GenerateResponse},
    error::AppError,
    AppState,
};
use axum::{extract::State, Json};

/// Relay a prompt to the configured text provider and return the
/// generated text.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = payload.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "prompt must be a non-empty string"
        )));
    }

    tracing::debug!(prompt_len = prompt.len(), "Relaying prompt to provider");

    let response = state.text_provider.generate(prompt).await.map_err(|e| {
        tracing::error!("Text generation failed: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(GenerateResponse {
        result: response.text,
    }))
}
