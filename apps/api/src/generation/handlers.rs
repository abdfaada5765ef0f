//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::compiler::TemplateVariant;
use crate::models::resume::{GenerationRequest, Provenance};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub resume_markdown: String,
    pub validation_summary: String,
    pub provenance: Provenance,
}

#[derive(Debug, Serialize)]
pub struct PromptPreviewResponse {
    pub variant: TemplateVariant,
    pub prompt: String,
}

fn validate(request: &GenerationRequest) -> Result<(), AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Compiles the prompt, makes one Gemini call, and returns the resume.
/// A degraded result is still a 200; check `provenance`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    validate(&request)?;

    let result = state.generator.generate_resume_with(&request).await?;

    Ok(Json(GenerateResponse {
        generation_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        resume_markdown: result.resume_markdown,
        validation_summary: result.validation_summary,
        provenance: result.provenance,
    }))
}

/// POST /api/v1/resumes/prompt
///
/// Returns the compiled prompt without calling Gemini. Works without a credential.
pub async fn handle_prompt_preview(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<PromptPreviewResponse>, AppError> {
    validate(&request)?;

    let compiler = state.generator.compiler_for(&request);
    let prompt = compiler.compile(&request.job_description);

    Ok(Json(PromptPreviewResponse {
        variant: compiler.variant(),
        prompt: prompt.into_inner(),
    }))
}
