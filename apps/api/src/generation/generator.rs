//! Resume Generation: one round trip from job description to `GenerationResult`.
//!
//! Flow: credential gate → compile prompt → Gemini (JSON mode) →
//!       decode-or-degrade → return.
//!
//! A malformed model response is recovered into a degraded result. Only a
//! missing credential or an upstream failure surfaces as an error.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::generation::compiler::{PromptCompiler, TemplateVariant};
use crate::generation::reference_profile::ReferenceProfile;
use crate::llm_client::{
    decode_or_else, ApiKey, CompletionBackend, CompletionRequest, LlmError, JSON_MIME_TYPE,
};
use crate::models::resume::{GenerationRequest, GenerationResult, ResumePayload};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("GEMINI_API_KEY is not configured")]
    Configuration,

    #[error("Upstream LLM call failed: {0}")]
    Upstream(#[source] LlmError),
}

/// Generates tailored resumes. Built once at startup; every field is read-only.
#[derive(Clone)]
pub struct ResumeGenerator {
    credential: Option<ApiKey>,
    backend: Arc<dyn CompletionBackend>,
    model: String,
    default_variant: TemplateVariant,
    profile: ReferenceProfile,
}

impl ResumeGenerator {
    pub fn new(
        credential: Option<ApiKey>,
        backend: Arc<dyn CompletionBackend>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            credential,
            backend,
            model: model.into(),
            default_variant: TemplateVariant::default(),
            profile: ReferenceProfile::bundled(),
        }
    }

    pub fn with_default_variant(mut self, variant: TemplateVariant) -> Self {
        self.default_variant = variant;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn default_variant(&self) -> TemplateVariant {
        self.default_variant
    }

    /// The compiler a request would use, without checking the credential.
    pub fn compiler_for(&self, request: &GenerationRequest) -> PromptCompiler {
        PromptCompiler::new(
            request.variant.unwrap_or(self.default_variant),
            self.profile,
        )
    }

    /// Generates a resume with the default template variant.
    #[allow(dead_code)]
    pub async fn generate_resume(
        &self,
        job_description: &str,
    ) -> Result<GenerationResult, GenerationError> {
        self.generate_resume_with(&GenerationRequest::new(job_description))
            .await
    }

    pub async fn generate_resume_with(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let api_key = self
            .credential
            .as_ref()
            .ok_or(GenerationError::Configuration)?;

        let compiler = self.compiler_for(request);
        let prompt = compiler.compile(&request.job_description);
        debug!(
            "Compiled {} prompt ({} bytes)",
            compiler.variant(),
            prompt.as_str().len()
        );

        let raw = self
            .backend
            .complete(
                api_key,
                CompletionRequest {
                    model: &self.model,
                    prompt: prompt.as_str(),
                    response_mime_type: Some(JSON_MIME_TYPE),
                },
            )
            .await
            .map_err(|e| {
                error!("Error generating resume: {e}");
                GenerationError::Upstream(e)
            })?;

        let result = normalize_response(&raw);
        info!(
            "Generated resume with model {} (provenance: {:?})",
            self.model, result.provenance
        );
        Ok(result)
    }
}

/// Strict decode of the model's payload, degrading to raw text on failure.
pub fn normalize_response(raw: &str) -> GenerationResult {
    decode_or_else::<ResumePayload, _, _>(raw, |raw, e| {
        warn!("Failed to parse JSON response ({e}): {raw}");
        GenerationResult::degraded(raw)
    })
}
