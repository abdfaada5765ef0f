//! Prompt Compiler: turns a job description into the single prompt sent to Gemini.
//!
//! Pure and deterministic: same variant + profile + job description always
//! yields byte-identical output. Formatting rules live in the template; the
//! model's output is never post-processed for formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{
    BACKEND_PERSONA, BACKEND_ROLE_FOCUS, GENERAL_PERSONA, GENERAL_ROLE_FOCUS,
    RESUME_PROMPT_TEMPLATE,
};
use crate::generation::reference_profile::ReferenceProfile;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NO_FABRICATION_INSTRUCTION};

/// Which persona/role framing the template opens with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    General,
    Backend,
}

impl TemplateVariant {
    fn persona(self) -> &'static str {
        match self {
            TemplateVariant::General => GENERAL_PERSONA,
            TemplateVariant::Backend => BACKEND_PERSONA,
        }
    }

    fn role_focus(self) -> &'static str {
        match self {
            TemplateVariant::General => GENERAL_ROLE_FOCUS,
            TemplateVariant::Backend => BACKEND_ROLE_FOCUS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateVariant::General => "general",
            TemplateVariant::Backend => "backend",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(TemplateVariant::General),
            "backend" => Ok(TemplateVariant::Backend),
            other => Err(format!(
                "unknown template variant '{other}' (expected 'general' or 'backend')"
            )),
        }
    }
}

/// The fully rendered prompt. Created per call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt(String);

impl CompiledPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Fills the resume template for one variant against one reference profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptCompiler {
    variant: TemplateVariant,
    profile: ReferenceProfile,
}

impl PromptCompiler {
    pub fn new(variant: TemplateVariant, profile: ReferenceProfile) -> Self {
        Self { variant, profile }
    }

    pub fn variant(&self) -> TemplateVariant {
        self.variant
    }

    /// Interpolates `job_description` verbatim; no escaping, no trimming.
    pub fn compile(&self, job_description: &str) -> CompiledPrompt {
        // job_description goes in last so placeholder-looking text inside it stays literal.
        let prompt = RESUME_PROMPT_TEMPLATE
            .replace("{persona}", self.variant.persona())
            .replace("{role_focus}", self.variant.role_focus())
            .replace("{no_fabrication_instruction}", NO_FABRICATION_INSTRUCTION)
            .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
            .replace("{reference_resume}", self.profile.text())
            .replace("{job_description}", job_description);
        CompiledPrompt(prompt)
    }
}

/// Compiles with the default (general) variant and the bundled profile.
#[allow(dead_code)]
pub fn compile_prompt(job_description: &str) -> CompiledPrompt {
    PromptCompiler::default().compile(job_description)
}
