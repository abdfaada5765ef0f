use serde::{Deserialize, Serialize};

use crate::generation::compiler::TemplateVariant;

/// Sentinel placed in `validation_summary` when the model's output could not be decoded.
pub const UNPARSED_SUMMARY_SENTINEL: &str = "Could not parse validation summary.";

/// Input to one generation call. An empty `job_description` is passed through to the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    pub job_description: String,
    /// Falls back to the generator's configured default when absent.
    #[serde(default)]
    pub variant: Option<TemplateVariant>,
}

impl GenerationRequest {
    pub fn new(job_description: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
            variant: None,
        }
    }

    pub fn with_variant(mut self, variant: TemplateVariant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// How a `GenerationResult` was obtained from the model's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Both fields decoded from the model's JSON payload.
    WellFormed,
    /// Output was not the expected JSON; raw text kept as the resume body.
    Degraded,
}

/// The JSON object the model is instructed to return.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumePayload {
    pub resume_markdown: String,
    pub validation_summary: String,
}

/// Canonical output of resume generation. Always carries displayable resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub resume_markdown: String,
    pub validation_summary: String,
    pub provenance: Provenance,
}

impl GenerationResult {
    pub fn degraded(raw_text: impl Into<String>) -> Self {
        Self {
            resume_markdown: raw_text.into(),
            validation_summary: UNPARSED_SUMMARY_SENTINEL.to_string(),
            provenance: Provenance::Degraded,
        }
    }

    #[allow(dead_code)]
    pub fn is_degraded(&self) -> bool {
        self.provenance == Provenance::Degraded
    }
}

impl From<ResumePayload> for GenerationResult {
    fn from(payload: ResumePayload) -> Self {
        Self {
            resume_markdown: payload.resume_markdown,
            validation_summary: payload.validation_summary,
            provenance: Provenance::WellFormed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_variant_defaults_to_none() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"job_description": "Rust engineer"}"#).unwrap();
        assert_eq!(request.job_description, "Rust engineer");
        assert!(request.variant.is_none());
    }

    #[test]
    fn test_request_accepts_variant() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"job_description": "x", "variant": "backend"}"#).unwrap();
        assert_eq!(request.variant, Some(TemplateVariant::Backend));
    }

    #[test]
    fn test_payload_requires_both_fields() {
        let missing = serde_json::from_str::<ResumePayload>(r#"{"resume_markdown": "R"}"#);
        assert!(missing.is_err());
        let wrong_type = serde_json::from_str::<ResumePayload>(
            r#"{"resume_markdown": "R", "validation_summary": 3}"#,
        );
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_degraded_result_uses_sentinel() {
        let result = GenerationResult::degraded("raw");
        assert_eq!(result.resume_markdown, "raw");
        assert_eq!(result.validation_summary, UNPARSED_SUMMARY_SENTINEL);
        assert!(result.is_degraded());
    }

    #[test]
    fn test_result_serializes_provenance_snake_case() {
        let result = GenerationResult::from(ResumePayload {
            resume_markdown: "R".to_string(),
            validation_summary: "V".to_string(),
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["provenance"], "well_formed");
        assert_eq!(json["resume_markdown"], "R");
    }
}
